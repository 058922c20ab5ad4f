//! Service selection

use super::config::ServiceConfig;
use crate::error::{Result, UncomposeError};

/// Select one service by name or 1-based index
///
/// A selector that parses as an integer is treated as an index into the
/// declaration order; anything else must match a service name exactly.
pub fn select_service<'a>(
    services: &'a [ServiceConfig],
    selector: &str,
) -> Result<&'a ServiceConfig> {
    if let Ok(index) = selector.parse::<i64>() {
        if index >= 1 && index as usize <= services.len() {
            return Ok(&services[index as usize - 1]);
        }
        return Err(UncomposeError::ServiceIndexOutOfBounds(index));
    }

    services
        .iter()
        .find(|s| s.name == selector)
        .ok_or_else(|| UncomposeError::ServiceNotFound(selector.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services() -> Vec<ServiceConfig> {
        ["web", "db", "cache"]
            .iter()
            .map(|name| ServiceConfig {
                name: name.to_string(),
                image: Some(format!("{}-image", name)),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_select_by_index() {
        let services = services();
        assert_eq!(select_service(&services, "1").unwrap().name, "web");
        assert_eq!(select_service(&services, "3").unwrap().name, "cache");
    }

    #[test]
    fn test_select_by_name() {
        let services = services();
        assert_eq!(select_service(&services, "db").unwrap().name, "db");
    }

    #[test]
    fn test_index_out_of_bounds() {
        let services = services();
        assert!(matches!(
            select_service(&services, "0").unwrap_err(),
            UncomposeError::ServiceIndexOutOfBounds(0)
        ));
        assert!(matches!(
            select_service(&services, "4").unwrap_err(),
            UncomposeError::ServiceIndexOutOfBounds(4)
        ));
        assert!(matches!(
            select_service(&services, "-1").unwrap_err(),
            UncomposeError::ServiceIndexOutOfBounds(-1)
        ));
    }

    #[test]
    fn test_name_not_found() {
        let services = services();
        assert!(matches!(
            select_service(&services, "proxy").unwrap_err(),
            UncomposeError::ServiceNotFound(_)
        ));
    }
}
