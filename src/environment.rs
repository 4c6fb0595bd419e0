use std::collections::HashMap;
use std::ffi::OsString;

/// Read-only view of environment variables.
///
/// `Process` reads the live process environment on every lookup and never
/// copies it. `Fixed` holds an injected table, which lets callers resolve
/// commands against a `PATH` of their choosing. Values are raw OS strings;
/// a `PATH` that is not valid UTF-8 is still searched.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Process,
    Fixed(HashMap<String, OsString>),
}

impl Environment {
    pub fn new() -> Self {
        Environment::Process
    }

    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OsString>,
    {
        Environment::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<OsString> {
        match self {
            Environment::Process => std::env::var_os(key),
            Environment::Fixed(vars) => vars.get(key).cloned(),
        }
    }

    /// The command search path, if set.
    pub fn path(&self) -> Option<OsString> {
        self.get("PATH")
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    #[test]
    fn test_fixed_lookup() {
        let env = Environment::fixed([("PATH", "/a:/b"), ("HOME", "/home/me")]);
        assert_eq!(env.path().as_deref(), Some(OsStr::new("/a:/b")));
        assert_eq!(env.get("HOME").as_deref(), Some(OsStr::new("/home/me")));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_fixed_without_path() {
        let env = Environment::fixed(Vec::<(String, String)>::new());
        assert_eq!(env.path(), None);
    }

    #[test]
    fn test_non_utf8_value_is_kept() {
        let raw = OsStr::from_bytes(b"/opt/bin\xff:/usr/bin");
        let env = Environment::fixed([("PATH", raw)]);
        assert_eq!(env.path().as_deref(), Some(raw));
    }

    #[test]
    fn test_process_matches_std_env() {
        let env = Environment::new();
        assert_eq!(env.path(), std::env::var_os("PATH"));
    }
}
