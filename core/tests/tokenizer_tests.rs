use paperdex_core::tokenizer::tokens;

#[test]
fn it_uppercases_and_splits_on_separators() {
    let toks: Vec<String> = tokens("Distributed Systems, 2nd ed. (1994)").collect();
    assert_eq!(toks, vec!["DISTRIBUTED", "SYSTEMS", "2ND", "ED", "1994"]);
}

#[test]
fn it_keeps_non_ascii_letters() {
    let toks: Vec<String> = tokens("naïve café-au-lait").collect();
    assert_eq!(toks, vec!["NAÏVE", "CAFÉ", "AU", "LAIT"]);
}

#[test]
fn it_yields_nothing_for_blank_input() {
    assert_eq!(tokens("").count(), 0);
    assert_eq!(tokens(" \n\t .,;:!?").count(), 0);
}
