use langcalc::*;

#[test]
fn test_language_concatenation_example() {
    let l1 = parse_set("a,aa,aba");
    let l2 = parse_set("b,ab");

    let result = concatenate_languages(&l1, &l2);
    assert_eq!(result, parse_set("ab, aab, aaab, abab, abaab"));
    assert_eq!(format_set(&result), "{aaab, aab, ab, abaab, abab}");
}

#[test]
fn test_kleene_closure_example() {
    let l = parse_set("a,b");
    let result = kleene_closure(&l, 4).unwrap();

    assert_eq!(result.len(), 31);
    assert!(result.contains(""));
    for word in &result {
        assert!(word.len() <= 4);
        assert!(word.chars().all(|c| c == 'a' || c == 'b'));
    }
    assert!(result.contains("bbbb"));
    assert!(result.contains("abba"));
}

#[test]
fn test_text_in_text_out() {
    let examples = vec![
        (Operation::Union, vec!["A=a,b,c", "B=b,c,d"], "A ∪ B = {a, b, c, d}"),
        (Operation::Intersection, vec!["A=a,b,c", "B=b,c,d"], "A ∩ B = {b, c}"),
        (Operation::Difference, vec!["A=a,b,c", "B=b,c,d"], "A - B = {a}"),
        (Operation::SymmetricDifference, vec!["A=a,b,c", "B=b,c,d"], "A Δ B = {a, d}"),
        (Operation::Complement, vec!["A=a,b,c", "U=a,b,c,d,e,f"], "A' = {d, e, f}"),
        (Operation::WordConcat, vec!["w1=abc", "w2=def"], "'abc' · 'def' = 'abcdef'"),
        (Operation::WordPower, vec!["w=ab", "n=3"], "'ab'^3 = 'ababab'"),
        (Operation::WordReverse, vec!["w=abcd"], "'abcd'^R = 'dcba'"),
        (Operation::WordLength, vec!["w=hello"], "|'hello'| = 5"),
        (Operation::LanguageConcat, vec!["L1=a", "L2="], "L₁ · L₂ = ∅"),
        (Operation::LanguagePower, vec!["L=", "n=0"], "L^0 = {ε}"),
        (Operation::LanguageReverse, vec!["L=ab,abc"], "L^R = {ba, cba}"),
        (Operation::LanguageUnion, vec!["L1=a", "L2=b"], "L₁ ∪ L₂ = {a, b}"),
        (Operation::LanguageIntersection, vec!["L1=a,b", "L2=b"], "L₁ ∩ L₂ = {b}"),
        (Operation::LanguageDifference, vec!["L1=a,b", "L2=b"], "L₁ - L₂ = {a}"),
        (Operation::Kleene, vec!["L=", "k=3"], "L* (up to 3 iterations) = {ε}"),
        (Operation::Positive, vec!["L=", "k=3"], "L⁺ (up to 3 iterations) = ∅"),
    ];

    let engine = Engine::new();
    for (operation, args, expected) in examples {
        println!("\n=== Testing: {} {:?} ===", operation, args);
        let inputs = parse_inputs(&args).unwrap();
        let response = engine.evaluate(operation, &inputs).unwrap();
        assert_eq!(response.summary, expected);
    }
}

#[test]
fn test_epsilon_round_trip_through_engine() {
    let engine = Engine::new();
    let inputs = parse_inputs(&["L1=ε", "L2=a,b"]).unwrap();
    let response = engine.evaluate(Operation::LanguageConcat, &inputs).unwrap();
    assert_eq!(response.summary, "L₁ · L₂ = {a, b}");
    assert_eq!(response.operand("L1").unwrap().to_string(), "{ε}");
}
