//! User search query model

use serde::Deserialize;

/// Query string for `GET /usuarios?usuario=<term>`
///
/// An absent parameter searches with the empty term, which matches everyone.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub usuario: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_absent_parameter_defaults_to_empty() {
        let query: Query<SearchQuery> = Query::from_query("").unwrap();
        assert!(query.usuario.is_empty());
    }

    #[test]
    fn test_parses_the_term() {
        let query: Query<SearchQuery> = Query::from_query("usuario=ada").unwrap();
        assert_eq!(query.usuario, "ada");
    }
}
