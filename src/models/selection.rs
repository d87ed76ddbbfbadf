use crate::error::{AppError, AppResult};
use serde::Serialize;

/// 题目筛选策略
///
/// 序号 `i` 被选中当且仅当 `i % modulus == remainder`，
/// 并且（未设置区间，或 `start <= i <= end`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionPolicy {
    remainder: usize,
    modulus: usize,
    range: Option<(usize, usize)>,
}

impl SelectionPolicy {
    /// 创建筛选策略，`modulus >= 1` 且 `remainder < modulus`
    pub fn new(remainder: usize, modulus: usize) -> AppResult<Self> {
        if modulus == 0 {
            return Err(AppError::Config("modulus 至少为 1".to_string()));
        }
        if remainder >= modulus {
            return Err(AppError::Config(format!(
                "remainder {} 必须小于 modulus {}",
                remainder, modulus
            )));
        }
        Ok(Self {
            remainder,
            modulus,
            range: None,
        })
    }

    /// 处理所有题目
    pub fn all() -> Self {
        Self {
            remainder: 0,
            modulus: 1,
            range: None,
        }
    }

    /// 限定闭区间 [start, end]
    pub fn with_range(mut self, start: usize, end: usize) -> AppResult<Self> {
        if start > end {
            return Err(AppError::Config(format!(
                "区间起点 {} 大于终点 {}",
                start, end
            )));
        }
        self.range = Some((start, end));
        Ok(self)
    }

    pub fn remainder(&self) -> usize {
        self.remainder
    }

    pub fn modulus(&self) -> usize {
        self.modulus
    }

    pub fn range(&self) -> Option<(usize, usize)> {
        self.range
    }

    /// 判断某个序号是否需要处理
    pub fn is_selected(&self, ordinal: usize) -> bool {
        if ordinal % self.modulus != self.remainder {
            return false;
        }
        match self.range {
            Some((start, end)) => start <= ordinal && ordinal <= end,
            None => true,
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(policy: &SelectionPolicy, total: usize) -> Vec<usize> {
        (1..=total).filter(|&i| policy.is_selected(i)).collect()
    }

    #[test]
    fn test_every_fifth_question() {
        let policy = SelectionPolicy::new(0, 5).unwrap();
        assert_eq!(selected(&policy, 12), vec![5, 10]);
    }

    #[test]
    fn test_modulus_one_selects_everything() {
        let policy = SelectionPolicy::all();
        assert_eq!(selected(&policy, 6), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let policy = SelectionPolicy::new(0, 1).unwrap().with_range(3, 7).unwrap();
        assert_eq!(selected(&policy, 12), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_modulus_and_range_combine_with_and() {
        let policy = SelectionPolicy::new(1, 2).unwrap().with_range(4, 9).unwrap();
        assert_eq!(selected(&policy, 12), vec![5, 7, 9]);
    }

    #[test]
    fn test_matches_formula_for_all_ordinals() {
        for modulus in 1..=6 {
            for remainder in 0..modulus {
                for range in [None, Some((2, 8)), Some((5, 5))] {
                    let mut policy = SelectionPolicy::new(remainder, modulus).unwrap();
                    if let Some((s, e)) = range {
                        policy = policy.with_range(s, e).unwrap();
                    }
                    for i in 0..30 {
                        let expected = i % modulus == remainder
                            && range.map_or(true, |(s, e)| s <= i && i <= e);
                        assert_eq!(policy.is_selected(i), expected, "i={} policy={:?}", i, policy);
                    }
                }
            }
        }
    }

    #[test]
    fn test_invalid_policies_are_rejected() {
        assert!(SelectionPolicy::new(0, 0).is_err());
        assert!(SelectionPolicy::new(3, 3).is_err());
        assert!(SelectionPolicy::all().with_range(7, 3).is_err());
    }
}
