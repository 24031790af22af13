/// Presentational category of a suggestion. Does not affect filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Keyword,
    Function,
    Property,
    Variable,
    Method,
}

impl SuggestionKind {
    pub fn display(&self) -> &'static str {
        match self {
            SuggestionKind::Keyword => "keyword",
            SuggestionKind::Function => "function",
            SuggestionKind::Property => "property",
            SuggestionKind::Variable => "variable",
            SuggestionKind::Method => "method",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Suggestion {
    /// Text the user sees and that prefix matching runs against.
    pub label: &'static str,
    /// Text inserted on acceptance. Coincides with the label in this catalog.
    pub insert_text: &'static str,
    pub kind: SuggestionKind,
    pub description: Option<&'static str>,
}

impl Suggestion {
    const fn keyword(label: &'static str) -> Self {
        Self {
            label,
            insert_text: label,
            kind: SuggestionKind::Keyword,
            description: None,
        }
    }

    const fn function(label: &'static str, description: &'static str) -> Self {
        Self {
            label,
            insert_text: label,
            kind: SuggestionKind::Function,
            description: Some(description),
        }
    }

    const fn variable(label: &'static str, description: &'static str) -> Self {
        Self {
            label,
            insert_text: label,
            kind: SuggestionKind::Variable,
            description: Some(description),
        }
    }
}

/// Static Luau completion catalog. Order is ranking order: keywords first,
/// then stdlib functions, then the scheduling/engine entries.
pub const LUAU_SUGGESTIONS: &[Suggestion] = &[
    // Keywords
    Suggestion::keyword("and"),
    Suggestion::keyword("break"),
    Suggestion::keyword("continue"),
    Suggestion::keyword("do"),
    Suggestion::keyword("else"),
    Suggestion::keyword("elseif"),
    Suggestion::keyword("end"),
    Suggestion::keyword("export"),
    Suggestion::keyword("false"),
    Suggestion::keyword("for"),
    Suggestion::keyword("function"),
    Suggestion::keyword("if"),
    Suggestion::keyword("in"),
    Suggestion::keyword("local"),
    Suggestion::keyword("nil"),
    Suggestion::keyword("not"),
    Suggestion::keyword("or"),
    Suggestion::keyword("repeat"),
    Suggestion::keyword("return"),
    Suggestion::keyword("then"),
    Suggestion::keyword("true"),
    Suggestion::keyword("type"),
    Suggestion::keyword("typeof"),
    Suggestion::keyword("until"),
    Suggestion::keyword("while"),
    // Common functions
    Suggestion::function("print", "Prints values to the output"),
    Suggestion::function("warn", "Prints a warning message"),
    Suggestion::function("error", "Raises an error with the given message"),
    Suggestion::function("assert", "Raises an error if condition is false"),
    Suggestion::function("tonumber", "Converts a value to a number"),
    Suggestion::function("tostring", "Converts a value to a string"),
    Suggestion::function("type", "Returns the type of a value"),
    Suggestion::function("typeof", "Returns the exact type of a value"),
    Suggestion::function("pairs", "Iterates over a table"),
    Suggestion::function("ipairs", "Iterates over an array part of a table"),
    Suggestion::function("next", "Returns the next key-value pair in a table"),
    Suggestion::function("unpack", "Unpacks a table into individual values"),
    Suggestion::function("rawget", "Gets a value from a table without invoking metamethods"),
    Suggestion::function("rawset", "Sets a value in a table without invoking metamethods"),
    Suggestion::function("rawequal", "Compares two values without invoking metamethods"),
    Suggestion::function("collectgarbage", "Controls the garbage collector"),
    // Scheduling and engine globals
    Suggestion::function("task.wait", "Yields the current thread for the specified duration"),
    Suggestion::function("task.spawn", "Runs a function in a separate thread"),
    Suggestion::function("task.delay", "Schedules a function to be called after a delay"),
    Suggestion::function("Instance.new", "Creates a new instance of the specified class"),
    Suggestion::variable("game", "The game service"),
    Suggestion::variable("workspace", "The workspace service"),
    Suggestion::variable("script", "The current script instance"),
];
