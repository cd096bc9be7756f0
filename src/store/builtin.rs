//! Builtin profile documents compiled into the binary.
//!
//! One JSON document per stack in the detection rule table. `init`
//! materializes these into the user profile directory; until then the
//! store serves them directly from the binary.

/// (name, JSON document) pairs, sorted by name.
pub static ALL: &[(&str, &str)] = &[
    ("android", include_str!("../../profiles/android.json")),
    ("cpp", include_str!("../../profiles/cpp.json")),
    ("flutter", include_str!("../../profiles/flutter.json")),
    ("go", include_str!("../../profiles/go.json")),
    ("ios-swift", include_str!("../../profiles/ios-swift.json")),
    ("java", include_str!("../../profiles/java.json")),
    ("javascript-node", include_str!("../../profiles/javascript-node.json")),
    ("python", include_str!("../../profiles/python.json")),
    ("rust", include_str!("../../profiles/rust.json")),
    ("typescript-node", include_str!("../../profiles/typescript-node.json")),
    ("typescript-react", include_str!("../../profiles/typescript-react.json")),
];

/// Look up a builtin document by profile name.
pub fn get(name: &str) -> Option<&'static str> {
    ALL.iter().find(|(n, _)| *n == name).map(|(_, doc)| *doc)
}

/// All builtin profile names, sorted.
pub fn names() -> Vec<String> {
    ALL.iter().map(|(name, _)| (*name).to_string()).collect()
}
