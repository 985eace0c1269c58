use crate::{GrowableString, StringList};

fn random_text(alphabet: &[u8], max_len: usize) -> Vec<u8> {
    (0..fastrand::usize(0..=max_len))
        .map(|_| alphabet[fastrand::usize(0..alphabet.len())])
        .collect()
}

#[test]
fn test_split_join_roundtrip_randomized() {
    fastrand::seed(1234);
    for _ in 0..500 {
        let text = random_text(b"ab,;", 30);
        let delimiter = if fastrand::bool() { &b","[..] } else { &b",;"[..] };
        let s = GrowableString::new(&text, 8).unwrap();
        let list = s.split(delimiter).unwrap();
        let count = s.count(delimiter).unwrap();
        assert_eq!(list.len(), count + 1, "text {:?}", s);
        assert_eq!(list.join(delimiter).unwrap(), s);
        assert!(list.iter().all(|part| !part.contains(delimiter)));
    }
}

#[test]
fn test_replace_matches_std_randomized() {
    fastrand::seed(4321);
    for _ in 0..500 {
        let text = random_text(b"xyz", 24);
        let find = random_text(b"xyz", 2);
        if find.is_empty() {
            continue;
        }
        let with = random_text(b"XY", 3);
        let s = GrowableString::new(&text, 4).unwrap();
        let expected = String::from_utf8(text.clone())
            .unwrap()
            .replace(std::str::from_utf8(&find).unwrap(), std::str::from_utf8(&with).unwrap());
        assert_eq!(s.replace(&find, &with).unwrap(), expected.as_str());
    }
}

#[test]
fn test_string_list_owns_copies() {
    let mut source = GrowableString::new("left right", 16).unwrap();
    let list = source.split(b" ").unwrap();
    source.clear();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], "left");
    assert_eq!(list[1], "right");

    let words: Vec<GrowableString> = list.into_vec();
    assert_eq!(words.len(), 2);
}

#[test]
fn test_string_list_debug() {
    let mut list = StringList::new();
    list.push(GrowableString::new("a", 1).unwrap());
    list.push(GrowableString::new("b", 1).unwrap());
    assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
}
