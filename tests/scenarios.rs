use fluent_pattern_match as fpm;
use fpm::{Animal, Cat, Dog, Matchable, Skunk};
use pretty_assertions::assert_eq;

#[derive(Default, Debug, PartialEq)]
struct Hits {
    berty: bool,
    rover: bool,
    dog: bool,
    cat: bool,
    other: bool,
}

// Runs the side-effecting clause chain and records which handler fired.
fn classify(animal: &Animal) -> Hits {
    let berty = Dog::new("Berty");
    let mut hits = Hits::default();
    animal
        .pattern_match()
        .case_value_do(&berty, |_| hits.berty = true)
        .case_when_do(|a: &Animal| a.name() == "Rover", |_| hits.rover = true)
        .case_do(|_: &Dog| hits.dog = true)
        .case_do(|_: &Cat| hits.cat = true)
        .otherwise_do(|_| hits.other = true);
    hits
}

#[test]
fn test_matches_value() {
    assert_eq!(
        classify(&Dog::new("Berty").into()),
        Hits { berty: true, ..Hits::default() }
    );
}

#[test]
fn test_matches_predicate() {
    assert_eq!(
        classify(&Dog::new("Rover").into()),
        Hits { rover: true, ..Hits::default() }
    );
}

#[test]
fn test_matches_dog_type() {
    assert_eq!(
        classify(&Dog::new("Sebastian").into()),
        Hits { dog: true, ..Hits::default() }
    );
}

#[test]
fn test_matches_cat_type() {
    assert_eq!(
        classify(&Cat::new("Ravichandran").into()),
        Hits { cat: true, ..Hits::default() }
    );
}

#[test]
fn test_matches_default() {
    assert_eq!(
        classify(&Skunk::new("Henry").into()),
        Hits { other: true, ..Hits::default() }
    );
}

#[test]
fn test_descriptions_follow_clause_order() {
    let cases: Vec<(Animal, &str)> = vec![
        (Dog::new("Berty").into(), "Berty!"),
        (Skunk::new("Rover").into(), "Rover!"),
        (Dog::new("Arthur").into(), "a dog called Arthur"),
        (Cat::new("Sally").into(), "a cat called Sally"),
        (Skunk::new("Grace").into(), "an animal called Grace"),
    ];
    for (animal, expected) in cases {
        assert_eq!(fpm::describe(&animal), expected, "for {animal:?}");
    }
}

#[test]
fn test_value_clause_only_matches_same_kind() {
    // A skunk named Berty is not the dog Berty.
    assert_eq!(
        fpm::describe(&Skunk::new("Berty").into()),
        "an animal called Berty"
    );
}

#[test]
fn test_type_clause_before_value_clause_wins() {
    let animal: Animal = Dog::new("Berty").into();
    let out = fpm::pattern_match(&animal)
        .returns::<&str>()
        .unwrap()
        .case(|_: &Dog| "dog")
        .case_value(&Dog::new("Berty"), |_| "Berty!")
        .result();
    assert_eq!(out, Some("dog"));
}

#[test]
fn test_str_subject_value_clause() {
    // Unsized subjects match against their own type
    let out = fpm::pattern_match("abc")
        .returns::<u8>()
        .unwrap()
        .case_value("abc", |_| 1)
        .result();
    assert_eq!(out, Some(1));
}
