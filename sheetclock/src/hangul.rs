// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Initial-consonant (chosung) search over Korean names.
//!
//! Employee pickers let users type `ㄱㅁㅅ` or `김ㅁ` to find `김민수`. Syllables are
//! decomposed arithmetically: every precomposed syllable in `U+AC00..=U+D7A3` is
//! `base + (initial * 21 + medial) * 28 + final`.

use std::collections::BTreeSet;

const SYLLABLE_FIRST: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const SYLLABLES_PER_INITIAL: u32 = 21 * 28;

/// Compatibility jamo for the 19 initial consonants, in syllable order.
const CHOSUNG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Initial consonant of a precomposed Hangul syllable.
///
/// Returns `None` for anything that is not a syllable, including bare jamo.
pub fn chosung(c: char) -> Option<char> {
    let code = c as u32;
    if !(SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let idx = ((code - SYLLABLE_FIRST) / SYLLABLES_PER_INITIAL) as usize;
    CHOSUNG.get(idx).copied()
}

/// Whether `c` is one of the initial-consonant jamo.
pub fn is_chosung(c: char) -> bool {
    CHOSUNG.contains(&c)
}

/// Replace every syllable in `s` with its initial consonant.
pub fn initials(s: &str) -> String {
    s.chars().map(|c| chosung(c).unwrap_or(c)).collect()
}

fn char_matches(name: char, query: char) -> bool {
    if name == query {
        return true;
    }
    if is_chosung(query) {
        return chosung(name) == Some(query);
    }
    name.to_lowercase().eq(query.to_lowercase())
}

/// Whether `query` occurs in `name`.
///
/// A bare initial consonant in the query matches any syllable starting with it,
/// other characters match themselves case-insensitively. An empty query matches
/// every name.
pub fn matches(name: &str, query: &str) -> bool {
    let query: Vec<char> = query.trim().chars().collect();
    if query.is_empty() {
        return true;
    }
    let name: Vec<char> = name.chars().collect();

    name.windows(query.len())
        .any(|w| w.iter().zip(&query).all(|(n, q)| char_matches(*n, *q)))
}

/// Names matching `query`, in input order.
pub fn filter<'a, S: AsRef<str>>(names: &'a [S], query: &str) -> Vec<&'a str> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| matches(name, query))
        .collect()
}

/// Index key of a name: its first initial consonant, or the uppercased first letter.
pub fn initial_of(name: &str) -> Option<char> {
    let first = name.trim().chars().next()?;
    chosung(first).or_else(|| first.to_uppercase().next())
}

/// Distinct index keys of `names`, sorted.
pub fn index<S: AsRef<str>>(names: &[S]) -> Vec<char> {
    names
        .iter()
        .filter_map(|name| initial_of(name.as_ref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
