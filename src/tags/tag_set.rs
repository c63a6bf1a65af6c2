use crate::errors::TagError;

/// Maximum tag length in characters, counting the leading `#`.
pub const MAX_TAG_CHARS: usize = 20;

/// Ordered, duplicate-free set of tags attached to a post draft.
///
/// An owned value passed through the handlers that edit it, not shared
/// page state. Every entry goes through validation, including ones read
/// back from a form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Validates the tag, then appends it. Duplicates are rejected and
    /// leave the set untouched.
    pub fn insert(&mut self, raw: &str) -> Result<(), TagError> {
        let tag = raw.trim();
        if !is_valid_tag(tag) {
            return Err(TagError::InvalidFormat(tag.to_string()));
        }
        if self.contains(tag) {
            return Err(TagError::Duplicate(tag.to_string()));
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Removes the tag if present; returns whether anything was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Value for the hidden form field the post form submits.
    #[must_use]
    pub fn to_hidden_field(&self) -> String {
        self.tags.join(",")
    }

    /// Reads back the hidden field an edit form was seeded with: a JSON
    /// array of tags. An empty field means no tags. Every entry is
    /// re-validated; the server is not trusted to have kept them clean.
    pub fn from_hidden_field(raw: &str) -> Result<Self, TagError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::new());
        }
        let parsed: Vec<String> = serde_json::from_str(raw).map_err(TagError::MalformedField)?;
        Self::try_from(parsed)
    }
}

impl TryFrom<Vec<String>> for TagSet {
    type Error = TagError;

    fn try_from(tags: Vec<String>) -> Result<Self, TagError> {
        let mut set = Self::new();
        for tag in &tags {
            set.insert(tag)?;
        }
        Ok(set)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

/// `#` followed by 1 to 19 letters, digits, or underscores; Unicode
/// letters count, whitespace does not.
fn is_valid_tag(tag: &str) -> bool {
    let Some(body) = tag.strip_prefix('#') else {
        return false;
    };
    let chars = body.chars().count();
    (1..MAX_TAG_CHARS).contains(&chars) && body.chars().all(|c| c.is_alphanumeric() || c == '_')
}
