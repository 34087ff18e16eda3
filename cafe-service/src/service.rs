//! 咖啡馆查询服务模块

use std::sync::Arc;

use common::errors::{AppError, AppResult};
use common::models::cafe::CafeQuery;

use crate::catalog::CityCatalog;

/// 响应体中咖啡馆名称之间的分隔符
const NAME_SEPARATOR: &str = ",";

/// 咖啡馆查询服务：按城市查找、按关键字过滤并限制数量
pub struct CafeService {
    catalog: Arc<CityCatalog>,
}

impl CafeService {
    /// 创建新的查询服务实例
    pub fn new(catalog: Arc<CityCatalog>) -> Self {
        Self { catalog }
    }

    /// 按目录顺序返回匹配的咖啡馆名称
    ///
    /// 先校验城市再校验数量：城市未知且数量非法时报告 `unknown city`。
    pub fn find(&self, query: &CafeQuery) -> AppResult<Vec<String>> {
        let cafes = query
            .city
            .as_deref()
            .and_then(|city| self.catalog.cafes(city))
            .ok_or(AppError::UnknownCity)?;

        let limit = parse_count(query.count.as_deref())?;
        let needle = query
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let result: Vec<String> = cafes
            .iter()
            .filter(|name| match &needle {
                Some(needle) => name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        tracing::debug!(
            city = query.city.as_deref().unwrap_or_default(),
            limit = ?limit,
            search = needle.as_deref().unwrap_or_default(),
            found = result.len(),
            "咖啡馆查询完成"
        );

        Ok(result)
    }

    /// 将名称拼接为纯文本响应体
    pub fn render(names: &[String]) -> String {
        names.join(NAME_SEPARATOR)
    }
}

/// 解析 `count` 参数，`None` 表示不限制数量
///
/// 空值与缺省等同。
fn parse_count(raw: Option<&str>) -> AppResult<Option<usize>> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| AppError::IncorrectCount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CafeService {
        CafeService::new(Arc::new(CityCatalog::builtin()))
    }

    fn query(pairs: &[(&str, &str)]) -> CafeQuery {
        CafeQuery::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_unknown_city() {
        let svc = service();
        assert!(matches!(
            svc.find(&query(&[])),
            Err(AppError::UnknownCity)
        ));
        assert!(matches!(
            svc.find(&query(&[("city", "omsk")])),
            Err(AppError::UnknownCity)
        ));
        assert!(matches!(
            svc.find(&query(&[("city", "omsk"), ("count", "na")])),
            Err(AppError::UnknownCity)
        ));
    }

    #[test]
    fn test_incorrect_count() {
        let svc = service();
        for raw in ["na", "-1", "1.5", " 2"] {
            assert!(
                matches!(
                    svc.find(&query(&[("city", "tula"), ("count", raw)])),
                    Err(AppError::IncorrectCount)
                ),
                "count={raw:?}"
            );
        }
    }

    #[test]
    fn test_count_limits_in_order() {
        let svc = service();
        let all = svc.find(&query(&[("city", "moscow")])).unwrap();
        assert_eq!(all.len(), 5);

        assert!(svc
            .find(&query(&[("city", "moscow"), ("count", "0")]))
            .unwrap()
            .is_empty());

        let two = svc
            .find(&query(&[("city", "moscow"), ("count", "2")]))
            .unwrap();
        assert_eq!(two, all[..2]);

        let many = svc
            .find(&query(&[("city", "moscow"), ("count", "100")]))
            .unwrap();
        assert_eq!(many, all);
    }

    #[test]
    fn test_empty_count_means_unlimited() {
        let svc = service();
        let result = svc
            .find(&query(&[("city", "tula"), ("count", "")]))
            .unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_search_ignores_case() {
        let svc = service();
        let expected = vec!["Мир кофе".to_string(), "Кофе и завтраки".to_string()];
        for term in ["кофе", "КофЕ", "КОФЕ"] {
            let result = svc
                .find(&query(&[("city", "moscow"), ("search", term)]))
                .unwrap();
            assert_eq!(result, expected, "search={term}");
        }
    }

    #[test]
    fn test_search_then_count() {
        let svc = service();
        let result = svc
            .find(&query(&[("city", "moscow"), ("search", "кофе"), ("count", "1")]))
            .unwrap();
        assert_eq!(result, vec!["Мир кофе".to_string()]);
    }

    #[test]
    fn test_search_without_match() {
        let svc = service();
        let result = svc
            .find(&query(&[("city", "moscow"), ("search", "ФаСоль")]))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_search_keeps_all() {
        let svc = service();
        let result = svc
            .find(&query(&[("city", "tula"), ("search", "")]))
            .unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_render() {
        assert_eq!(CafeService::render(&[]), "");
        assert_eq!(CafeService::render(&["a".to_string()]), "a");
        assert_eq!(
            CafeService::render(&["a".to_string(), "b".to_string()]),
            "a,b"
        );
    }
}
