/// Read-only view of one document shared by every strategy.
#[derive(Debug, Clone)]
pub struct DocumentView<'a> {
    raw: &'a str,
    normalized: &'a str,
    first_name: Option<String>,
}

impl<'a> DocumentView<'a> {
    pub fn new(raw: &'a str, normalized: &'a str) -> Self {
        Self {
            raw,
            normalized,
            first_name: apparent_first_name(raw),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn normalized(&self) -> &'a str {
        self.normalized
    }

    /// Lower-cased apparent given name of the candidate, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }
}

// Résumés usually open with the candidate's name: take the first capitalized
// word of the first non-blank line, else its first word.
fn apparent_first_name(raw: &str) -> Option<String> {
    let line = raw.lines().map(str::trim).find(|line| !line.is_empty())?;
    let tokens: Vec<&str> = line
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphabetic()))
        .filter(|token| !token.is_empty())
        .collect();

    tokens
        .iter()
        .find(|token| token.chars().next().is_some_and(char::is_uppercase))
        .or_else(|| tokens.first())
        .map(|token| token.to_lowercase())
}

/// One named way of inferring a value; `None` means no evidence.
pub trait Strategy<T>: Send + Sync {
    fn name(&self) -> &'static str;
    fn attempt(&self, document: &DocumentView<'_>) -> Option<T>;
}

/// Value produced by a chain together with the strategy that fired.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub strategy: &'static str,
}

/// Ordered strategies evaluated with short-circuit.
pub struct FallbackChain<T> {
    strategies: Vec<Box<dyn Strategy<T>>>,
}

impl<T> FallbackChain<T> {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn then<S>(mut self, strategy: S) -> Self
    where
        S: Strategy<T> + 'static,
    {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|strategy| strategy.name()).collect()
    }

    pub fn resolve(&self, document: &DocumentView<'_>) -> Option<Resolved<T>> {
        self.strategies.iter().find_map(|strategy| {
            strategy.attempt(document).map(|value| Resolved {
                value,
                strategy: strategy.name(),
            })
        })
    }
}

impl<T> Default for FallbackChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
