use collections::CharStringMap;
use log::info;

/// Entries loaded before the first prompt.
/// `'D'` and `'X'` share a bucket, `'R'` and `'X'` are overwritten once.
pub const DEMO_ENTRIES: [(char, &str); 8] = [
    ('R', "Rom"),
    ('L', "Lenny"),
    ('R', "Rammy overwrote Rom"),
    ('r', "Case-sensitive!"),
    ('D', "The derivative of the integral."),
    ('X', "This should cause a hash collision with D."),
    ('X', "But we may never know for sure. ;)"),
    ('G', "Gaby"),
];

pub fn seed(map: &mut CharStringMap) {
    for (key, value) in DEMO_ENTRIES {
        let outcome = map.insert(key, value);
        info!(target: "seed", "{key:?}: {outcome}");
    }
}

#[cfg(test)]
mod tests {
    use collections::CharStringMap;

    use super::seed;

    #[test]
    fn demo_entries() {
        let mut map = CharStringMap::new();
        seed(&mut map);

        assert_eq!(map.len(), 6);
        assert_eq!(map.get('R').as_deref(), Some("Rammy overwrote Rom"));
        assert_eq!(map.get('r').as_deref(), Some("Case-sensitive!"));
        assert_eq!(map.get('X').as_deref(), Some("But we may never know for sure. ;)"));
        assert_eq!(map.get('D').as_deref(), Some("The derivative of the integral."));
        assert_eq!(map.chain_len(map.bucket_index('D')), Some(2));
        assert_eq!(map.get('Z'), None);
    }
}
