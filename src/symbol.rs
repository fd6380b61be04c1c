/// One code unit of the input alphabet.
pub type Symbol = char;

/// Reserved symbol placed between two lines of a document.
pub const LINE_TERMINATOR: Symbol = '\n';

pub fn display_symbol(symbol: Symbol) -> String {
    if symbol == LINE_TERMINATOR {
        String::from("\\n")
    } else {
        symbol.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminator_is_escaped() {
        assert_eq!(display_symbol(LINE_TERMINATOR), "\\n");
        assert_eq!(display_symbol('a'), "a");
        assert_eq!(display_symbol(' '), " ");
    }
}
