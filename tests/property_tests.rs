use proptest::prelude::*;
use text_huffman::huffman::Node;
use text_huffman::{Document, HuffmanCoder};

fn check_weights(node: &Node) -> bool {
    match node {
        Node::Leaf { .. } => true,
        Node::Internal {
            weight,
            left,
            right,
        } => *weight == left.weight() + right.weight() && check_weights(left) && check_weights(right),
    }
}

proptest! {
    #[test]
    fn test_round_trip(text in "[a-e \n]{1,200}") {
        let document = Document::from_text(&text);
        prop_assume!(!document.is_empty());

        let coder = HuffmanCoder::build(document.clone()).unwrap();
        let decoded = coder.decode(&coder.encode()).unwrap();

        prop_assert_eq!(decoded, document);
    }

    #[test]
    fn test_round_trip_any_text(text in "\\PC{1,100}(\n\\PC{0,50}){0,4}") {
        let document = Document::from_text(&text);
        prop_assume!(!document.is_empty());

        let coder = HuffmanCoder::build(document.clone()).unwrap();
        prop_assert_eq!(coder.decode(&coder.encode()).unwrap(), document);
    }

    #[test]
    fn test_prefix_free(text in "[a-z\n]{2,300}") {
        let document = Document::from_text(&text);
        prop_assume!(!document.is_empty());

        let coder = HuffmanCoder::build(document).unwrap();
        let codes: Vec<&String> = coder.code_table().values().collect();
        for (i, c1) in codes.iter().enumerate() {
            for (j, c2) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!c2.starts_with(c1.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_weight_invariant(text in "[a-h\n]{1,300}") {
        let document = Document::from_text(&text);
        prop_assume!(!document.is_empty());

        let coder = HuffmanCoder::build(document).unwrap();
        prop_assert!(check_weights(coder.tree()));
        prop_assert_eq!(coder.tree().weight(), coder.document().symbol_count() as u64);
    }

    #[test]
    fn test_average_bits_not_below_entropy(text in "[a-p]{1,300}") {
        let coder = HuffmanCoder::from_text(&text).unwrap();
        prop_assert!(coder.average_bits_per_symbol() + 1e-9 >= coder.entropy());

        let decoded_len = coder.decode(&coder.encode()).unwrap().symbol_count();
        let expected = coder.encode().len() as f64 / decoded_len as f64;
        prop_assert!((coder.average_bits_per_symbol() - expected).abs() < 1e-12);
    }
}

#[test]
fn uniform_alphabet_uses_k_bits() {
    // 2^3 symbols, each equally frequent
    let alphabet = "abcdefgh";
    let text = alphabet.repeat(50);
    let coder = HuffmanCoder::from_text(&text).unwrap();

    assert_eq!(coder.average_bits_per_symbol(), 3.0);
    assert!(coder.code_table().values().all(|code| code.len() == 3));
}

#[test]
fn single_symbol_document() {
    let coder = HuffmanCoder::from_text("aaaa").unwrap();
    let stream = coder.encode();

    assert_eq!(coder.code('a'), Some("0"));
    assert_eq!(stream.len(), 4);
    assert_eq!(coder.decode(&stream).unwrap().to_string(), "aaaa");
}
