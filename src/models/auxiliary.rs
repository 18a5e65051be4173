use serde::Serialize;

/// Auxiliary field of an entry.
///
/// Older deployments stored a free-text domain tag here; newer ones store a
/// derived allotment count. The two meanings are kept as an explicit tagged
/// variant instead of one overloaded column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Auxiliary {
    Domain(String),
    Allotment(i64),
}

impl Auxiliary {
    /// Tag stored in the `aux_kind` column.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Auxiliary::Domain(_) => "domain",
            Auxiliary::Allotment(_) => "allotment",
        }
    }

    /// Value stored in the `aux_value` column.
    pub fn value_str(&self) -> String {
        match self {
            Auxiliary::Domain(d) => d.clone(),
            Auxiliary::Allotment(n) => n.to_string(),
        }
    }

    /// Rebuild the variant from its DB representation.
    ///
    /// Legacy rows (and any unknown tag) fall back to the free-text domain
    /// reading so that old data keeps loading.
    pub fn from_db(kind: &str, value: &str) -> Self {
        match kind {
            "allotment" => match value.parse::<i64>() {
                Ok(n) => Auxiliary::Allotment(n),
                Err(_) => Auxiliary::Domain(value.to_string()),
            },
            _ => Auxiliary::Domain(value.to_string()),
        }
    }

    /// Human-readable form for tables and exports.
    pub fn display(&self) -> String {
        self.value_str()
    }
}

impl Default for Auxiliary {
    fn default() -> Self {
        Auxiliary::Domain(String::new())
    }
}
