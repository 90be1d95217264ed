use std::fmt;

pub const DEFAULT_OFFSET: usize = 0;
pub const DEFAULT_LIMIT: usize = 20;
pub const DEFAULT_CROP_LENGTH: usize = 200;
pub const RETRIEVE_ALL: &str = "*";

/// Parameters of a single search, serialized into the query string of
/// `GET /indexes/{uid}/search`.
///
/// Setters consume and return the request, so a value is built once and then
/// handed to [`crate::index::Index::search`]:
///
/// ```
/// use meili_client::search_request::SearchRequest;
///
/// let request = SearchRequest::new("batman")
///     .with_limit(5)
///     .with_attributes_to_crop(["overview"])
///     .with_crop_length(50);
/// assert!(request.query_string().contains("&attributesToCrop=overview"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    q: String,
    offset: usize,
    limit: usize,
    attributes_to_retrieve: Vec<String>,
    attributes_to_crop: Option<Vec<String>>,
    crop_length: usize,
    attributes_to_highlight: Option<Vec<String>>,
    filters: Option<String>,
    matches: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new("")
    }
}

impl SearchRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
            attributes_to_retrieve: vec![RETRIEVE_ALL.to_string()],
            attributes_to_crop: None,
            crop_length: DEFAULT_CROP_LENGTH,
            attributes_to_highlight: None,
            filters: None,
            matches: false,
        }
    }

    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_attributes_to_retrieve<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_retrieve = collect_attributes(attributes);
        self
    }

    pub fn with_attributes_to_crop<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_crop = Some(collect_attributes(attributes));
        self
    }

    pub fn with_crop_length(mut self, crop_length: usize) -> Self {
        self.crop_length = crop_length;
        self
    }

    pub fn with_attributes_to_highlight<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_highlight = Some(collect_attributes(attributes));
        self
    }

    /// Sets the filter expression. Passing `None` keeps whatever filter was set before.
    pub fn with_filters<'a>(mut self, filters: impl Into<Option<&'a str>>) -> Self {
        if let Some(filters) = filters.into() {
            self.filters = Some(filters.to_string());
        }
        self
    }

    pub fn with_matches(mut self, matches: bool) -> Self {
        self.matches = matches;
        self
    }

    pub fn query(&self) -> &str {
        &self.q
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn attributes_to_retrieve(&self) -> &[String] {
        &self.attributes_to_retrieve
    }

    pub fn attributes_to_crop(&self) -> Option<&[String]> {
        self.attributes_to_crop.as_deref()
    }

    pub fn crop_length(&self) -> usize {
        self.crop_length
    }

    pub fn attributes_to_highlight(&self) -> Option<&[String]> {
        self.attributes_to_highlight.as_deref()
    }

    /// The raw (unencoded) filter expression.
    pub fn filters(&self) -> Option<&str> {
        self.filters.as_deref()
    }

    pub fn matches(&self) -> bool {
        self.matches
    }

    /// Serializes the request as `?q=..&offset=..`.
    ///
    /// `q`, `offset`, `limit`, `attributesToRetrieve`, `cropLength` and `matches`
    /// are always present, in that order. `attributesToCrop`,
    /// `attributesToHighlight` and `filters` follow only when set.
    pub fn query_string(&self) -> String {
        let mut out = format!(
            "?q={}&offset={}&limit={}&attributesToRetrieve={}&cropLength={}&matches={}",
            encode_query_text(&self.q),
            self.offset,
            self.limit,
            self.attributes_to_retrieve.join(","),
            self.crop_length,
            self.matches,
        );

        if let Some(attributes) = &self.attributes_to_crop {
            out.push_str("&attributesToCrop=");
            out.push_str(&attributes.join(","));
        }

        if let Some(attributes) = &self.attributes_to_highlight {
            out.push_str("&attributesToHighlight=");
            out.push_str(&attributes.join(","));
        }

        if let Some(filters) = &self.filters {
            out.push_str("&filters=");
            out.push_str(&urlencoding::encode(filters));
        }

        out
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_string())
    }
}

fn collect_attributes<I, S>(attributes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    attributes.into_iter().map(Into::into).collect()
}

/// Every whitespace character becomes `%20`; runs are not collapsed. Characters
/// that would end or split the `q` parameter (`&`, `#`, `+`, `%`, `=`, `?`) are
/// percent-encoded, everything else is left to the URL parser.
fn encode_query_text(q: &str) -> String {
    let mut out = String::with_capacity(q.len());
    for c in q.chars() {
        match c {
            c if c.is_whitespace() => out.push_str("%20"),
            '&' | '#' | '+' | '%' | '=' | '?' => out.push_str(&format!("%{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
