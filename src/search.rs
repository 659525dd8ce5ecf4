/*!
# Substring Search

Knuth-Morris-Pratt substring search. The pattern is compiled once into a
deterministic finite automaton over the byte alphabet; searching then
consumes the text in a single pass without ever backing up, which makes the
automaton reusable across texts and suitable for streams.

Construction takes `O(256 * len(pattern))` time and space, searching
`O(len(text))`.
*/

/// Size of the byte alphabet
const RADIX: usize = 256;

/// A compiled Knuth-Morris-Pratt search automaton for one pattern.
///
/// `dfa[state][byte]` is the state reached after reading `byte` while
/// `state` pattern bytes are already matched; reaching state
/// `pattern.len()` is a match.
pub struct Kmp {
    pattern: Vec<u8>,
    dfa: Vec<[usize; RADIX]>,
}

impl Kmp {
    /// Compiles the automaton for the given pattern. An empty pattern is
    /// permitted and matches at offset zero.
    pub fn new(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut dfa = vec![[0; RADIX]; m];

        if m > 0 {
            dfa[0][pattern[0] as usize] = 1;
            let mut restart = 0;
            for j in 1..m {
                // mismatches behave as if the search had started at the
                // restart state
                dfa[j] = dfa[restart];
                dfa[j][pattern[j] as usize] = j + 1;
                restart = dfa[restart][pattern[j] as usize];
            }
        }

        Self {
            pattern: pattern.to_vec(),
            dfa,
        }
    }

    /// Returns the pattern this automaton was compiled from
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Returns the offset of the first occurrence of the pattern in `text`,
    /// or `None` if the pattern does not occur
    pub fn search(&self, text: &[u8]) -> Option<usize> {
        let m = self.pattern.len();
        let mut state = 0;

        for (i, &byte) in text.iter().enumerate() {
            if state == m {
                return Some(i - m);
            }
            state = self.dfa[state][byte as usize];
        }

        (state == m).then(|| text.len() - m)
    }
}
