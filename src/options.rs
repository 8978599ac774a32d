/// Options for filtering filing requests
#[derive(Debug, Clone, Default)]
pub struct FilingOptions {
    /// Only return filings whose form label exactly equals one of these.
    pub form_types: Option<Vec<String>>,
    /// Skip this many filings from the start of the (reverse-chronological) list.
    pub offset: Option<usize>,
    /// Return at most this many filings.
    pub limit: Option<usize>,
}

impl FilingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_types = Some(vec![form_type.into()]);
        self
    }

    pub fn with_form_types(mut self, form_types: Vec<String>) -> Self {
        self.form_types = Some(form_types);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
