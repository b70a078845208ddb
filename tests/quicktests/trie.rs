use adts::trie::Trie;

use std::collections::HashMap;

use quickcheck_macros::quickcheck;

#[quickcheck]
fn find_agrees_with_a_map_model(entries: Vec<(String, Option<u8>)>) -> bool {
    let mut trie = Trie::new();
    let mut model: HashMap<String, Option<u8>> = HashMap::new();

    for (word, value) in entries {
        trie.add(&word, value);
        // Re-adding overwrites, exactly like a map insert.
        model.insert(word, value);
    }

    model
        .iter()
        .all(|(word, value)| trie.find(word) == value.as_ref())
}

#[quickcheck]
fn every_prefix_of_an_added_word_is_contained(words: Vec<String>) -> bool {
    let mut trie: Trie<()> = Trie::new();
    for word in &words {
        trie.add(word, None);
    }

    words.iter().all(|word| {
        let chars: Vec<char> = word.chars().collect();
        (0..=chars.len()).all(|end| {
            let prefix: String = chars[..end].iter().collect();
            trie.contains(&prefix)
        })
    })
}

#[quickcheck]
fn contains_means_some_word_starts_with_it(words: Vec<String>, probe: String) -> bool {
    let mut trie: Trie<()> = Trie::new();
    for word in &words {
        trie.add(word, None);
    }

    // The empty prefix always resolves: it names the root node.
    let expected = probe.is_empty() || words.iter().any(|word| word.starts_with(&probe));
    trie.contains(&probe) == expected
}

#[quickcheck]
fn suggest_chars_is_absent_exactly_when_unreachable(words: Vec<String>, probe: String) -> bool {
    let mut trie: Trie<()> = Trie::new();
    for word in &words {
        trie.add(word, None);
    }

    trie.suggest_chars(&probe).is_some() == trie.contains(&probe)
}

#[quickcheck]
fn suggested_chars_extend_to_reachable_prefixes(words: Vec<String>, probe: String) -> bool {
    let mut trie: Trie<()> = Trie::new();
    for word in &words {
        trie.add(word, None);
    }

    match trie.suggest_chars(&probe) {
        Some(chars) => chars.iter().all(|ch| {
            let mut extended = probe.clone();
            extended.push(*ch);
            trie.contains(&extended)
        }),
        None => true,
    }
}

#[quickcheck]
fn last_add_wins(word: String, values: Vec<Option<u8>>) -> bool {
    let mut trie = Trie::new();
    for value in &values {
        trie.add(&word, *value);
    }

    let expected = values.last().copied().flatten();
    trie.find(&word) == expected.as_ref()
}
