/// Query string accepted by `GET /books`.
/// `reading` and `finished` are kept raw: a value counts as true when its
/// leading integer is `1`, anything else as false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBooksQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl ListBooksQuery {
    /// Builds the query from decoded `key=value` pairs. When a key repeats,
    /// the first value wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = ListBooksQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}
