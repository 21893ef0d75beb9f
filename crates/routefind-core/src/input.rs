//! Problem input parsing
//!
//! Format (whitespace-delimited tokens, blank lines ignored):
//! ```text
//! <edge count N>
//! <label> <label> <weight>     (N times)
//! <start> <goal>
//! ```

use std::io::Read;

use crate::bail_malformed;
use crate::error::Result;
use crate::graph::{Graph, Weight};

/// A graph plus the pair of labels to search between
#[derive(Debug, Clone)]
pub struct Problem {
    pub graph: Graph,
    pub start: String,
    pub goal: String,
}

/// Token stream that remembers the line each token came from
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self {
            inner: Box::new(inner),
            last_line: 0,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let item = self.inner.next();
        if let Some((line, _)) = item {
            self.last_line = line;
        }
        item
    }

    /// Next token, or a malformed-input error naming what was expected
    fn expect(&mut self, what: &str) -> Result<(usize, &'a str)> {
        match self.next_token() {
            Some(item) => Ok(item),
            None => bail_malformed!(self.last_line + 1, "unexpected end of input, expected {}", what),
        }
    }
}

fn parse_weight(line: usize, token: &str) -> Result<Weight> {
    match token.parse::<Weight>() {
        Ok(weight) => Ok(weight),
        Err(_) => bail_malformed!(line, "weight is not a non-negative integer: {}", token),
    }
}

/// Parse a problem from its textual form
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut tokens = Tokens::new(text);

    let (count_line, count_token) = tokens.expect("edge count")?;
    let edge_count: usize = match count_token.parse() {
        Ok(n) => n,
        Err(_) => bail_malformed!(
            count_line,
            "edge count is not a non-negative integer: {}",
            count_token
        ),
    };

    let mut graph = Graph::new();
    for i in 0..edge_count {
        let what = format!("edge {} of {}", i + 1, edge_count);
        let (line_a, a) = tokens.expect(&what)?;
        let (line_b, b) = tokens.expect(&what)?;
        let (line_w, w) = tokens.expect(&format!("weight for {what}"))?;
        if line_a != line_b || line_b != line_w {
            bail_malformed!(line_a, "{} must be `<label> <label> <weight>` on one line", what);
        }
        graph.add(a, b, parse_weight(line_w, w)?);
    }

    let (start_line, start) = tokens.expect("start label")?;
    let (goal_line, goal) = tokens.expect("goal label")?;
    if start_line != goal_line {
        bail_malformed!(start_line, "start and goal must be on the same line");
    }

    if let Some((line, extra)) = tokens.next_token() {
        bail_malformed!(line, "unexpected trailing token: {}", extra);
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        start,
        goal,
        "parsed problem"
    );

    Ok(Problem {
        graph,
        start: start.to_string(),
        goal: goal.to_string(),
    })
}

/// Read and parse a problem from any reader (stdin, a file)
pub fn read_problem(mut reader: impl Read) -> Result<Problem> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = match std::str::from_utf8(&bytes) {
        Ok(text) => text,
        Err(e) => {
            let line = bytes[..e.valid_up_to()]
                .iter()
                .filter(|&&b| b == b'\n')
                .count()
                + 1;
            bail_malformed!(line, "input is not valid UTF-8");
        }
    };
    parse_problem(text)
}
