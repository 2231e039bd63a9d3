use utoipa::IntoParams;

#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HotelSearchParams {
    /// Substring of the hotel name; `%` and `_` act as LIKE wildcards
    pub query: Option<String>,
}

impl HotelSearchParams {
    /// Picks the search term out of raw query pairs
    ///
    /// A repeated `query` keeps its first value and unknown parameters are
    /// ignored, so no query string is ever rejected.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            query: pairs
                .into_iter()
                .find(|(key, _)| key == "query")
                .map(|(_, value)| value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_query_wins() {
        let params = HotelSearchParams::from_pairs(pairs(&[("query", "Lot"), ("query", "Aur")]));
        assert_eq!(params.query.as_deref(), Some("Lot"));
    }

    #[test]
    fn other_parameters_are_ignored() {
        let params = HotelSearchParams::from_pairs(pairs(&[("page", "2")]));
        assert_eq!(params, HotelSearchParams::default());

        let params = HotelSearchParams::from_pairs(pairs(&[("page", "2"), ("query", "")]));
        assert_eq!(params.query.as_deref(), Some(""));
    }
}
