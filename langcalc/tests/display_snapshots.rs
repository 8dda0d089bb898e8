use langcalc::{parse_inputs, Engine, Operation};

fn summary(operation: Operation, args: &[&str]) -> String {
    let inputs = parse_inputs(args).unwrap();
    Engine::new().evaluate(operation, &inputs).unwrap().summary
}

#[test]
fn snapshot_language_concat_defaults() {
    insta::assert_snapshot!(
        summary(Operation::LanguageConcat, &[]),
        @"L₁ · L₂ = {aaab, aab, ab, abaab, abab}"
    );
}

#[test]
fn snapshot_kleene_small() {
    insta::assert_snapshot!(
        summary(Operation::Kleene, &["L=a,b", "k=2"]),
        @"L* (up to 2 iterations) = {ε, a, aa, ab, b, ba, bb}"
    );
}

#[test]
fn snapshot_positive_small() {
    insta::assert_snapshot!(
        summary(Operation::Positive, &["L=ab", "k=3"]),
        @"L⁺ (up to 3 iterations) = {ab, abab, ababab}"
    );
}

#[test]
fn snapshot_symmetric_difference_defaults() {
    insta::assert_snapshot!(
        summary(Operation::SymmetricDifference, &[]),
        @"A Δ B = {a, d}"
    );
}

#[test]
fn snapshot_word_concat_with_epsilon() {
    insta::assert_snapshot!(
        summary(Operation::WordConcat, &["w1=ε", "w2=b"]),
        @"'ε' · 'b' = 'b'"
    );
}
