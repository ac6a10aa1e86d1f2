//! Punctuation stacked around URLs is split off without breaking the URL

use urlseg_core::{tokenize, AffixRules, Tokenizer, UnitKind};

const URLS_FULL: &[&str] = &[
    "http://www.nytimes.com/2016/04/20/us/politics/new-york-primary-preview.html?hp&action=click&pgtype=Homepage&clickSource=story-heading&module=a-lede-package-region&region=top-news&WT.nav=top-news&_r=0",
    "www.red-stars.com",
    "mailto:foo.bar@baz.com",
    "mailto:foo-bar@baz-co.com",
    "www.google.com?q=google",
    "http://foo.com/blah_(wikipedia)#cite-1",
];

/// Punctuation split away before the URL
const PREFIXES: &[&str] = &["(", "\"", ">"];

/// Punctuation split away after the URL
const SUFFIXES: &[&str] = &["\"", ":", ">"];

fn texts(text: &str) -> Vec<&str> {
    tokenize(text).into_iter().map(|t| t.text).collect()
}

#[test]
fn test_tokenizer_handles_prefixed_url() {
    for url in URLS_FULL {
        for prefix in PREFIXES {
            let text = format!("{prefix}{url}");
            assert_eq!(texts(&text), vec![*prefix, *url], "input: {text}");
        }
    }
}

#[test]
fn test_tokenizer_handles_suffixed_url() {
    for url in URLS_FULL {
        for suffix in SUFFIXES {
            let text = format!("{url}{suffix}");
            assert_eq!(texts(&text), vec![*url, *suffix], "input: {text}");
        }
    }
}

#[test]
fn test_tokenizer_handles_surround_url() {
    for url in URLS_FULL {
        for prefix in PREFIXES {
            for suffix in SUFFIXES {
                let text = format!("{prefix}{url}{suffix}");
                assert_eq!(texts(&text), vec![*prefix, *url, *suffix], "input: {text}");
            }
        }
    }
}

#[test]
fn test_tokenizer_handles_two_prefix_url() {
    for url in URLS_FULL {
        for prefix1 in PREFIXES {
            for prefix2 in PREFIXES {
                let text = format!("{prefix1}{prefix2}{url}");
                assert_eq!(
                    texts(&text),
                    vec![*prefix1, *prefix2, *url],
                    "input: {text}"
                );
            }
        }
    }
}

#[test]
fn test_tokenizer_handles_two_suffix_url() {
    for url in URLS_FULL {
        for suffix1 in SUFFIXES {
            for suffix2 in SUFFIXES {
                let text = format!("{url}{suffix1}{suffix2}");
                assert_eq!(
                    texts(&text),
                    vec![*url, *suffix1, *suffix2],
                    "input: {text}"
                );
            }
        }
    }
}

#[test]
fn test_two_marks_on_both_sides() {
    for url in URLS_FULL {
        let text = format!("(\"{url}\":");
        assert_eq!(texts(&text), vec!["(", "\"", *url, "\"", ":"], "input: {text}");
    }
}

#[test]
fn test_enclosure_example() {
    let tokens = tokenize("(www.red-stars.com)");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].text, "(");
    assert_eq!(tokens[0].kind, UnitKind::Prefix);
    assert_eq!(tokens[1].text, "www.red-stars.com");
    assert_eq!(tokens[1].kind, UnitKind::Core);
    assert_eq!(tokens[2].text, ")");
    assert_eq!(tokens[2].kind, UnitKind::Suffix);
}

#[test]
fn test_offsets_follow_marks() {
    let text = "  >\"www.red-stars.com\":  ";
    let tokens = tokenize(text);
    let spans: Vec<(usize, usize)> = tokens.iter().map(|t| (t.start, t.end)).collect();
    assert_eq!(spans, vec![(2, 3), (3, 4), (4, 21), (21, 22), (22, 23)]);
}

#[test]
fn test_marks_added_through_rules() {
    let mut rules = AffixRules::default();
    rules.extend(['*'], ['*', '|']);
    let tokenizer = Tokenizer::with_affixes(&rules);

    let tokens: Vec<&str> = tokenizer
        .tokenize("**www.red-stars.com*|")
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(tokens, vec!["*", "*", "www.red-stars.com", "*", "|"]);
}
