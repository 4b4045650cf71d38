/// Maps byte offsets from the parser's ranges back to source positions.
///
/// `rustpython-parser` reports node ranges as byte offsets into the
/// module source. A linter has to report real line/column pairs, so the
/// index records every line start once and answers lookups with a
/// binary search.
#[derive(Debug)]
pub struct SourceIndex {
    line_starts: Vec<usize>,
}

impl SourceIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Returns the (1-based line, 0-based column) of a byte offset.
    pub fn location(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let column = offset - self.line_starts[line - 1];
        (line, column)
    }

    pub fn line_of(&self, offset: usize) -> usize {
        self.location(offset).0
    }
}
