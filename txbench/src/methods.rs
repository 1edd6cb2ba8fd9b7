use std::fmt;

use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Naive,
    Signature,
    Bitslice,
    Inverted,
    RelevanceNaive,
    RelevanceInverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Containment,
    Relevance,
}

pub const ALL_METHODS: [Method; 6] = [
    Method::Naive,
    Method::Signature,
    Method::Bitslice,
    Method::Inverted,
    Method::RelevanceNaive,
    Method::RelevanceInverted,
];

pub const METHODS: phf::Map<&'static str, Method> = phf_map! {
    "naive" => Method::Naive,
    "signature" => Method::Signature,
    "bitslice" => Method::Bitslice,
    "inverted" => Method::Inverted,
    "relevance-naive" => Method::RelevanceNaive,
    "relevance-inverted" => Method::RelevanceInverted,
};

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Naive => "naive",
            Method::Signature => "signature",
            Method::Bitslice => "bitslice",
            Method::Inverted => "inverted",
            Method::RelevanceNaive => "relevance-naive",
            Method::RelevanceInverted => "relevance-inverted",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Method::Naive => "Naive Method",
            Method::Signature => "Signature File",
            Method::Bitslice => "Bitslice Method",
            Method::Inverted => "Inverted File Method",
            Method::RelevanceNaive => "Naive Relevance",
            Method::RelevanceInverted => "Inverted File Relevance",
        }
    }

    pub fn kind(&self) -> MethodKind {
        match self {
            Method::RelevanceNaive | Method::RelevanceInverted => MethodKind::Relevance,
            _ => MethodKind::Containment,
        }
    }

    /// File name of this method's index dump, if it builds a dumpable index.
    pub fn dump_file(&self) -> Option<&'static str> {
        match self {
            Method::Naive | Method::RelevanceNaive => None,
            Method::Signature => Some("sigfile.txt"),
            Method::Bitslice => Some("bitslice.txt"),
            Method::Inverted => Some("invfile.txt"),
            Method::RelevanceInverted => Some("invfileocc.txt"),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which methods a run evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    All,
    One(Method),
}

impl Selector {
    pub fn parse(name: &str) -> Result<Self, String> {
        if name == "all" {
            return Ok(Selector::All);
        }
        METHODS
            .get(name)
            .map(|&m| Selector::One(m))
            .ok_or_else(|| format!(
                "unknown method \"{}\", expected one of: all, {}",
                name,
                ALL_METHODS.map(|m| m.name()).join(", ")
            ))
    }

    pub fn methods(&self) -> Vec<Method> {
        match self {
            Selector::All => ALL_METHODS.to_vec(),
            Selector::One(method) => vec![*method],
        }
    }
}
