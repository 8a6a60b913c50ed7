use std::collections::HashSet;

/// Hands out names that haven't been handed out (or reserved) before.
#[derive(Default)]
pub struct UniqueNamer {
    taken_names: HashSet<String>,
}

impl UniqueNamer {
    pub fn new() -> UniqueNamer {
        UniqueNamer::default()
    }

    /// Marks `name` as taken without returning it, eg. for names that already
    /// exist on disk or in the input set.
    pub fn reserve<S: AsRef<str>>(&mut self, name: S) {
        self.taken_names.insert(name.as_ref().to_string());
    }

    /// Returns the first of
    ///
    /// * `"{desired_name}"`
    /// * `"{desired_name}1"`
    /// * `"{desired_name}2"`
    /// * ...
    ///
    /// that isn't taken, and marks it as taken.
    pub fn get_fresh_name<S: AsRef<str>>(&mut self, desired_name: S) -> String {
        let desired_name = desired_name.as_ref();
        let chosen_name =
            if !self.taken_names.contains(desired_name) {
                desired_name.to_string()
            } else {
                let mut name = String::new();
                for i in 1.. {
                    name = format!("{}{}", desired_name, i);
                    if !self.taken_names.contains(&name) {
                        break;
                    }
                }
                name
            };
        self.taken_names.insert(chosen_name.clone());
        chosen_name
    }
}

#[test]
fn test_unique_namer() {
    let mut un = UniqueNamer::new();
    un.reserve("Walk_Mirrored");
    assert_eq!(un.get_fresh_name("Run_Mirrored"), "Run_Mirrored");
    assert_eq!(un.get_fresh_name("Run_Mirrored"), "Run_Mirrored1");
    assert_eq!(un.get_fresh_name("Walk_Mirrored"), "Walk_Mirrored1");
    assert_eq!(un.get_fresh_name("Walk_Mirrored"), "Walk_Mirrored2");
}
