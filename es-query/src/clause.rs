use crate::errors::QueryError;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// Keys accepted for the clause kind, in lookup order
const KIND_KEYS: [&str; 2] = ["type", "kind"];
/// Keys accepted for the negation flag, in lookup order
const NEGATE_KEYS: [&str; 2] = ["not", "negate"];
/// Kind name reported when a clause does not say what it is
const UNKNOWN_KIND: &str = "<unknown>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    Term,
    Terms,
    Range,
    GeoDistance,
    Type,
    Exists,
    Missing,
}

impl ClauseKind {
    pub const ALL: [ClauseKind; 7] = [
        ClauseKind::Term,
        ClauseKind::Terms,
        ClauseKind::Range,
        ClauseKind::GeoDistance,
        ClauseKind::Type,
        ClauseKind::Exists,
        ClauseKind::Missing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseKind::Term => "term",
            ClauseKind::Terms => "terms",
            ClauseKind::Range => "range",
            ClauseKind::GeoDistance => "geo_distance",
            ClauseKind::Type => "type",
            ClauseKind::Exists => "exists",
            ClauseKind::Missing => "missing",
        }
    }

    /// Fields a clause of this kind must carry, in the order they are checked.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            ClauseKind::Term => &["field", "term"],
            ClauseKind::Terms => &["field", "terms"],
            ClauseKind::Range => &["field", "from", "to", "include_lower", "include_upper"],
            ClauseKind::GeoDistance => &["field", "distance", "unit", "point"],
            ClauseKind::Type => &["value"],
            ClauseKind::Exists | ClauseKind::Missing => &["field"],
        }
    }
}

impl std::fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClauseKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClauseKind::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| QueryError::UnsupportedClauseKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat: Value,
    pub lon: Value,
}

/// One filter condition. Values are carried as raw JSON and never coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Term {
        field: String,
        term: Value,
    },
    Terms {
        field: String,
        terms: Vec<Value>,
    },
    Range {
        field: String,
        from: Value,
        to: Value,
        include_lower: bool,
        include_upper: bool,
    },
    GeoDistance {
        field: String,
        distance: Number,
        unit: String,
        point: GeoPoint,
    },
    Type {
        value: String,
    },
    Exists {
        field: String,
    },
    Missing {
        field: String,
    },
}

impl Clause {
    pub fn kind(&self) -> ClauseKind {
        match self {
            Clause::Term { .. } => ClauseKind::Term,
            Clause::Terms { .. } => ClauseKind::Terms,
            Clause::Range { .. } => ClauseKind::Range,
            Clause::GeoDistance { .. } => ClauseKind::GeoDistance,
            Clause::Type { .. } => ClauseKind::Type,
            Clause::Exists { .. } => ClauseKind::Exists,
            Clause::Missing { .. } => ClauseKind::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub clause: Clause,
    pub negate: bool,
}

impl From<Clause> for FilterClause {
    fn from(clause: Clause) -> Self {
        FilterClause {
            clause,
            negate: false,
        }
    }
}

impl FilterClause {
    pub fn term(field: impl Into<String>, term: impl Into<Value>) -> Self {
        Clause::Term {
            field: field.into(),
            term: term.into(),
        }
        .into()
    }

    pub fn terms<I, V>(field: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Clause::Terms {
            field: field.into(),
            terms: terms.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    pub fn range(
        field: impl Into<String>,
        from: impl Into<Value>,
        to: impl Into<Value>,
        include_lower: bool,
        include_upper: bool,
    ) -> Self {
        Clause::Range {
            field: field.into(),
            from: from.into(),
            to: to.into(),
            include_lower,
            include_upper,
        }
        .into()
    }

    pub fn geo_distance(
        field: impl Into<String>,
        distance: impl Into<Number>,
        unit: impl Into<String>,
        lat: impl Into<Value>,
        lon: impl Into<Value>,
    ) -> Self {
        Clause::GeoDistance {
            field: field.into(),
            distance: distance.into(),
            unit: unit.into(),
            point: GeoPoint {
                lat: lat.into(),
                lon: lon.into(),
            },
        }
        .into()
    }

    /// A document type restriction (`{type: {value}}`).
    pub fn doc_type(value: impl Into<String>) -> Self {
        Clause::Type {
            value: value.into(),
        }
        .into()
    }

    pub fn exists(field: impl Into<String>) -> Self {
        Clause::Exists {
            field: field.into(),
        }
        .into()
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Clause::Missing {
            field: field.into(),
        }
        .into()
    }

    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    pub fn kind(&self) -> ClauseKind {
        self.clause.kind()
    }

    /// Decode a clause from its loose JSON object form, e.g.
    /// `{"type": "term", "field": "xyz", "term": "XXX", "not": true}`.
    pub fn from_json(value: &Value) -> Result<Self, QueryError> {
        let obj = value.as_object().ok_or_else(|| {
            QueryError::InvalidRequest(format!("filter clause must be an object, found {}", value))
        })?;

        let kind_key = first_present(obj, &KIND_KEYS)
            .ok_or_else(|| QueryError::malformed(UNKNOWN_KIND, KIND_KEYS[0]))?;
        let kind: ClauseKind = obj[kind_key]
            .as_str()
            .ok_or_else(|| QueryError::invalid_field(UNKNOWN_KIND, kind_key, "a string"))?
            .parse()?;

        let negate_key = first_present(obj, &NEGATE_KEYS);
        for key in obj.keys() {
            let known = key == kind_key
                || Some(key.as_str()) == negate_key
                || kind.required_fields().contains(&key.as_str());
            if !known {
                return Err(QueryError::UnknownClauseField {
                    kind: kind.to_string(),
                    field: key.clone(),
                });
            }
        }

        let negate = match negate_key.map(|key| (key, &obj[key])) {
            None | Some((_, Value::Null)) => false,
            Some((_, Value::Bool(flag))) => *flag,
            Some((key, _)) => return Err(QueryError::invalid_field(kind.as_str(), key, "a boolean")),
        };

        let reader = ClauseReader { kind, obj };
        reader.check_present()?;
        Ok(FilterClause {
            clause: reader.read()?,
            negate,
        })
    }
}

fn first_present<'a>(obj: &Map<String, Value>, keys: &[&'a str]) -> Option<&'a str> {
    keys.iter().copied().find(|key| obj.contains_key(*key))
}

struct ClauseReader<'a> {
    kind: ClauseKind,
    obj: &'a Map<String, Value>,
}

impl<'a> ClauseReader<'a> {
    /// Every required field must be present before any is type-checked, so a
    /// missing field is always reported as such.
    fn check_present(&self) -> Result<(), QueryError> {
        for field in self.kind.required_fields() {
            self.get(field)?;
        }
        Ok(())
    }

    fn read(&self) -> Result<Clause, QueryError> {
        let clause = match self.kind {
            ClauseKind::Term => Clause::Term {
                field: self.string("field")?,
                term: self.get("term")?.clone(),
            },
            ClauseKind::Terms => Clause::Terms {
                field: self.string("field")?,
                terms: self.array("terms")?,
            },
            ClauseKind::Range => Clause::Range {
                field: self.string("field")?,
                from: self.get("from")?.clone(),
                to: self.get("to")?.clone(),
                include_lower: self.boolean("include_lower")?,
                include_upper: self.boolean("include_upper")?,
            },
            ClauseKind::GeoDistance => Clause::GeoDistance {
                field: self.string("field")?,
                distance: self.number("distance")?,
                unit: self.string("unit")?,
                point: self.point("point")?,
            },
            ClauseKind::Type => Clause::Type {
                value: self.string("value")?,
            },
            ClauseKind::Exists => Clause::Exists {
                field: self.string("field")?,
            },
            ClauseKind::Missing => Clause::Missing {
                field: self.string("field")?,
            },
        };
        Ok(clause)
    }

    fn get(&self, field: &str) -> Result<&'a Value, QueryError> {
        match self.obj.get(field) {
            None | Some(Value::Null) => Err(QueryError::malformed(self.kind.as_str(), field)),
            Some(value) => Ok(value),
        }
    }

    fn string(&self, field: &str) -> Result<String, QueryError> {
        self.get(field)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| QueryError::invalid_field(self.kind.as_str(), field, "a string"))
    }

    fn boolean(&self, field: &str) -> Result<bool, QueryError> {
        self.get(field)?
            .as_bool()
            .ok_or_else(|| QueryError::invalid_field(self.kind.as_str(), field, "a boolean"))
    }

    fn number(&self, field: &str) -> Result<Number, QueryError> {
        match self.get(field)? {
            Value::Number(num) => Ok(num.clone()),
            _ => Err(QueryError::invalid_field(self.kind.as_str(), field, "a number")),
        }
    }

    fn array(&self, field: &str) -> Result<Vec<Value>, QueryError> {
        self.get(field)?
            .as_array()
            .cloned()
            .ok_or_else(|| QueryError::invalid_field(self.kind.as_str(), field, "an array"))
    }

    fn point(&self, field: &str) -> Result<GeoPoint, QueryError> {
        let coords = self
            .get(field)?
            .as_object()
            .ok_or_else(|| QueryError::invalid_field(self.kind.as_str(), field, "an object"))?;
        let coordinate = |name: &str| match coords.get(name) {
            None | Some(Value::Null) => Err(QueryError::malformed(
                self.kind.as_str(),
                format!("{}.{}", field, name),
            )),
            Some(value) => Ok(value.clone()),
        };
        let point = GeoPoint {
            lat: coordinate("lat")?,
            lon: coordinate("lon")?,
        };
        if let Some(key) = coords.keys().find(|key| !matches!(key.as_str(), "lat" | "lon")) {
            return Err(QueryError::UnknownClauseField {
                kind: self.kind.to_string(),
                field: format!("{}.{}", field, key),
            });
        }
        Ok(point)
    }
}
