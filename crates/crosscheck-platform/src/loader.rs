//! Description-file parsing and platform name resolution.
//!
//! Targets without a built-in configuration are described by a TOML file
//! carrying every width and size field of the descriptor. [`Platform::set`]
//! is the entry point an analyzer wires to its `--platform` option: a name
//! matching a built-in label applies that configuration, anything else is
//! resolved to a description file across an ordered list of candidate paths.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};
use crate::platform::{DefaultSign, Platform, PlatformType};

/// The serialized form of a platform description file.
///
/// This is the schema a description file is parsed against; unknown keys are
/// ignored, missing ones fail the parse. The `ty` tag of the descriptor is
/// not part of the file — a loaded descriptor is always tagged
/// [`PlatformType::File`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatformFile {
    /// Signedness of plain `char`; absent means unknown.
    #[serde(default)]
    pub default_sign: DefaultSign,
    /// The `[bits]` table: integer widths in bits.
    pub bits: BitWidths,
    /// The `[sizeof]` table: type sizes in bytes.
    pub sizeof: TypeSizes,
}

/// Integer bit widths of a description file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BitWidths {
    pub char: u32,
    pub short: u32,
    pub int: u32,
    pub long: u32,
    pub long_long: u32,
}

/// Type byte sizes of a description file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypeSizes {
    pub bool: usize,
    pub short: usize,
    pub int: usize,
    pub long: usize,
    pub long_long: usize,
    pub float: usize,
    pub double: usize,
    pub long_double: usize,
    #[serde(rename = "wchar_t")]
    pub wchar_t: usize,
    #[serde(rename = "size_t")]
    pub size_t: usize,
    pub pointer: usize,
}

impl PlatformFile {
    /// Check that every width and size is strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields: [(&str, u64); 16] = [
            ("bits.char", u64::from(self.bits.char)),
            ("bits.short", u64::from(self.bits.short)),
            ("bits.int", u64::from(self.bits.int)),
            ("bits.long", u64::from(self.bits.long)),
            ("bits.long-long", u64::from(self.bits.long_long)),
            ("sizeof.bool", self.sizeof.bool as u64),
            ("sizeof.short", self.sizeof.short as u64),
            ("sizeof.int", self.sizeof.int as u64),
            ("sizeof.long", self.sizeof.long as u64),
            ("sizeof.long-long", self.sizeof.long_long as u64),
            ("sizeof.float", self.sizeof.float as u64),
            ("sizeof.double", self.sizeof.double as u64),
            ("sizeof.long-double", self.sizeof.long_double as u64),
            ("sizeof.wchar_t", self.sizeof.wchar_t as u64),
            ("sizeof.size_t", self.sizeof.size_t as u64),
            ("sizeof.pointer", self.sizeof.pointer as u64),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(PlatformError::Validation {
                    detail: format!("{name} must be greater than zero"),
                });
            }
        }
        Ok(())
    }

    fn apply(&self, platform: &mut Platform) {
        *platform = Platform {
            ty: PlatformType::File,
            char_bit: self.bits.char,
            short_bit: self.bits.short,
            int_bit: self.bits.int,
            long_bit: self.bits.long,
            long_long_bit: self.bits.long_long,
            sizeof_bool: self.sizeof.bool,
            sizeof_short: self.sizeof.short,
            sizeof_int: self.sizeof.int,
            sizeof_long: self.sizeof.long,
            sizeof_long_long: self.sizeof.long_long,
            sizeof_float: self.sizeof.float,
            sizeof_double: self.sizeof.double,
            sizeof_long_double: self.sizeof.long_double,
            sizeof_wchar_t: self.sizeof.wchar_t,
            sizeof_size_t: self.sizeof.size_t,
            sizeof_pointer: self.sizeof.pointer,
            default_sign: self.default_sign,
        };
    }
}

impl From<&Platform> for PlatformFile {
    fn from(platform: &Platform) -> Self {
        PlatformFile {
            default_sign: platform.default_sign,
            bits: BitWidths {
                char: platform.char_bit,
                short: platform.short_bit,
                int: platform.int_bit,
                long: platform.long_bit,
                long_long: platform.long_long_bit,
            },
            sizeof: TypeSizes {
                bool: platform.sizeof_bool,
                short: platform.sizeof_short,
                int: platform.sizeof_int,
                long: platform.sizeof_long,
                long_long: platform.sizeof_long_long,
                float: platform.sizeof_float,
                double: platform.sizeof_double,
                long_double: platform.sizeof_long_double,
                wchar_t: platform.sizeof_wchar_t,
                size_t: platform.sizeof_size_t,
                pointer: platform.sizeof_pointer,
            },
        }
    }
}

/// Outcome of probing one candidate path during [`Platform::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The candidate does not exist or cannot be opened.
    NotFound,
    /// The candidate exists but failed to parse or validate.
    ParseError,
    /// The candidate was loaded into the descriptor.
    Loaded,
}

impl LookupOutcome {
    /// Human-readable label for trace output.
    pub fn as_str(self) -> &'static str {
        match self {
            LookupOutcome::NotFound => "not found",
            LookupOutcome::ParseError => "parse error",
            LookupOutcome::Loaded => "loaded",
        }
    }
}

/// Per-candidate observer for the file lookup in [`Platform::set_with_trace`].
///
/// Purely diagnostic: the events never influence which candidate wins.
pub trait LookupTrace {
    /// Called once per probed candidate, in probe order.
    fn candidate(&mut self, path: &Path, outcome: LookupOutcome);
}

/// Discards all lookup events.
pub struct SilentTrace;

impl LookupTrace for SilentTrace {
    fn candidate(&mut self, _path: &Path, _outcome: LookupOutcome) {}
}

/// Forwards lookup events to `log::debug!`.
pub struct LogTrace;

impl LookupTrace for LogTrace {
    fn candidate(&mut self, path: &Path, outcome: LookupOutcome) {
        debug!("platform lookup: {} ({})", path.display(), outcome.as_str());
    }
}

/// Candidate description files for `name`, in probe order.
///
/// Bases are the current directory (the literal path), each entry of
/// `search_paths`, and the running executable's directory. Every base is
/// tried as `name`, `name.toml`, `platforms/name`, and
/// `platforms/name.toml`; duplicates keep their first position.
fn lookup_candidates(name: &str, search_paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut bases: Vec<PathBuf> = Vec::with_capacity(search_paths.len() + 2);
    bases.push(PathBuf::new());
    bases.extend(search_paths.iter().cloned());
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        bases.push(exe_dir);
    }

    let with_ext = format!("{name}.toml");
    let mut candidates = Vec::new();
    for base in &bases {
        for candidate in [
            base.join(name),
            base.join(&with_ext),
            base.join("platforms").join(name),
            base.join("platforms").join(&with_ext),
        ] {
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

impl Platform {
    /// Parse a description from TOML text and apply it.
    ///
    /// The descriptor is fully overwritten and tagged
    /// [`PlatformType::File`] on success; a parse or validation failure
    /// leaves it untouched.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let file: PlatformFile = toml::from_str(text)?;
        file.validate()?;
        file.apply(self);
        Ok(())
    }

    /// Load a description file.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PlatformError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        self.load_from_str(&content)
    }

    /// Resolve `name` to a built-in configuration or a description file.
    ///
    /// A name matching a built-in label applies that configuration and
    /// returns. Anything else names a description file, probed as the
    /// literal path, then under each directory of `search_paths`, then under
    /// the running executable's directory; each base is tried as `name`,
    /// `name.toml`, `platforms/name`, and `platforms/name.toml`. The first
    /// candidate that opens and parses wins. On any failure the descriptor
    /// keeps its previous value.
    ///
    /// With `debug` set, one `log::debug!` line is emitted per probed
    /// candidate.
    pub fn set(&mut self, name: &str, search_paths: &[PathBuf], debug: bool) -> Result<()> {
        if debug {
            self.set_with_trace(name, search_paths, &mut LogTrace)
        } else {
            self.set_with_trace(name, search_paths, &mut SilentTrace)
        }
    }

    /// [`set`][Self::set] with an explicit per-candidate observer.
    pub fn set_with_trace(
        &mut self,
        name: &str,
        search_paths: &[PathBuf],
        trace: &mut dyn LookupTrace,
    ) -> Result<()> {
        if let Some(ty) = PlatformType::from_name(name) {
            // "platformFile" is how a loaded descriptor prints, not a
            // configuration that can be requested; fall through to the file
            // lookup for it.
            if ty != PlatformType::File {
                return self.set_type(ty);
            }
        }

        for candidate in lookup_candidates(name, search_paths) {
            if !candidate.is_file() {
                trace.candidate(&candidate, LookupOutcome::NotFound);
                continue;
            }
            let content = match std::fs::read_to_string(&candidate) {
                Ok(content) => content,
                Err(_) => {
                    trace.candidate(&candidate, LookupOutcome::NotFound);
                    continue;
                }
            };
            match self.load_from_str(&content) {
                Ok(()) => {
                    trace.candidate(&candidate, LookupOutcome::Loaded);
                    return Ok(());
                }
                Err(_) => trace.candidate(&candidate, LookupOutcome::ParseError),
            }
        }

        Err(PlatformError::UnknownPlatform { name: name.into() })
    }
}

/// Serialize the description-file view of a platform to pretty TOML.
pub fn platform_to_toml(platform: &Platform) -> Result<String> {
    let file = PlatformFile::from(platform);
    let toml_str = toml::to_string_pretty(&file)?;
    Ok(toml_str)
}

/// Generate a description-file template seeded from a built-in
/// configuration.
pub fn generate_template(ty: PlatformType) -> Result<String> {
    let mut platform = Platform::default();
    platform.set_type(ty)?;
    platform_to_toml(&platform)
}

/// Discover description files in `root/platforms/`.
///
/// Returns (platform name, file path) pairs sorted by name; a missing
/// directory is an empty list, not an error.
pub fn discover_platforms(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let platforms_dir = root.join("platforms");
    if !platforms_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut platforms = Vec::new();
    let entries = std::fs::read_dir(&platforms_dir)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(name) = file_name.strip_suffix(".toml") {
                platforms.push((name.to_string(), path));
            }
        }
    }
    platforms.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(platforms)
}

#[cfg(test)]
mod tests {
    use super::*;

    // msp430-gcc sizes: 16-bit int and pointers, 32-bit long.
    const SIXTEEN_BIT: &str = r#"
default-sign = "unsigned"

[bits]
char = 8
short = 16
int = 16
long = 32
long-long = 64

[sizeof]
bool = 1
short = 2
int = 2
long = 4
long-long = 8
float = 4
double = 4
long-double = 8
wchar_t = 2
size_t = 2
pointer = 2
"#;

    #[derive(Default)]
    struct RecordingTrace {
        events: Vec<(PathBuf, LookupOutcome)>,
    }

    impl LookupTrace for RecordingTrace {
        fn candidate(&mut self, path: &Path, outcome: LookupOutcome) {
            self.events.push((path.to_path_buf(), outcome));
        }
    }

    #[test]
    fn load_populates_every_field() {
        let mut platform = Platform::default();
        platform.load_from_str(SIXTEEN_BIT).unwrap();
        assert_eq!(platform.ty, PlatformType::File);
        assert_eq!(platform.char_bit, 8);
        assert_eq!(platform.short_bit, 16);
        assert_eq!(platform.int_bit, 16);
        assert_eq!(platform.long_bit, 32);
        assert_eq!(platform.long_long_bit, 64);
        assert_eq!(platform.sizeof_bool, 1);
        assert_eq!(platform.sizeof_short, 2);
        assert_eq!(platform.sizeof_int, 2);
        assert_eq!(platform.sizeof_long, 4);
        assert_eq!(platform.sizeof_long_long, 8);
        assert_eq!(platform.sizeof_float, 4);
        assert_eq!(platform.sizeof_double, 4);
        assert_eq!(platform.sizeof_long_double, 8);
        assert_eq!(platform.sizeof_wchar_t, 2);
        assert_eq!(platform.sizeof_size_t, 2);
        assert_eq!(platform.sizeof_pointer, 2);
        assert_eq!(platform.default_sign, DefaultSign::Unsigned);
    }

    #[test]
    fn loaded_descriptor_answers_range_queries() {
        let mut platform = Platform::default();
        platform.load_from_str(SIXTEEN_BIT).unwrap();
        assert!(platform.is_int_value(32767));
        assert!(!platform.is_int_value(32768));
        assert!(platform.is_long_value(2147483647));
        assert!(!platform.is_long_value(2147483648));
    }

    #[test]
    fn sign_defaults_to_unknown() {
        let without_sign = SIXTEEN_BIT.replace("default-sign = \"unsigned\"\n", "");
        let mut platform = Platform::default();
        platform.load_from_str(&without_sign).unwrap();
        assert_eq!(platform.default_sign, DefaultSign::Unknown);
    }

    #[test]
    fn parse_invalid_returns_error() {
        let mut platform = Platform::default();
        assert!(platform.load_from_str("this is not valid toml [[[").is_err());
    }

    #[test]
    fn missing_field_leaves_descriptor_untouched() {
        let incomplete = SIXTEEN_BIT.replace("pointer = 2\n", "");
        let mut platform = Platform::default();
        let err = platform.load_from_str(&incomplete).unwrap_err();
        assert!(matches!(err, PlatformError::Toml(_)));
        assert_eq!(platform, Platform::default());
    }

    #[test]
    fn zero_field_fails_validation() {
        let zeroed = SIXTEEN_BIT.replace("pointer = 2", "pointer = 0");
        let mut platform = Platform::default();
        let err = platform.load_from_str(&zeroed).unwrap_err();
        match err {
            PlatformError::Validation { detail } => {
                assert!(detail.contains("sizeof.pointer"), "{detail}");
            }
            other => panic!("expected validation error, got {other}"),
        }
        assert_eq!(platform, Platform::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let extended = format!("name = \"custom\"\n{SIXTEEN_BIT}intptr = 2\n");
        let mut platform = Platform::default();
        platform.load_from_str(&extended).unwrap();
        assert_eq!(platform.sizeof_pointer, 2);
    }

    #[test]
    fn toml_round_trip() {
        let original = Platform::win64();
        let text = platform_to_toml(&original).unwrap();
        let mut loaded = Platform::default();
        loaded.load_from_str(&text).unwrap();
        assert_eq!(loaded.ty, PlatformType::File);
        assert_eq!(PlatformFile::from(&loaded), PlatformFile::from(&original));
    }

    #[test]
    fn load_not_found() {
        let mut platform = Platform::default();
        let err = platform
            .load_from_file(Path::new("/nonexistent/board.toml"))
            .unwrap_err();
        assert!(matches!(err, PlatformError::NotFound { .. }));
        assert_eq!(platform, Platform::default());
    }

    #[test]
    fn load_from_file_populates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        std::fs::write(&path, SIXTEEN_BIT).unwrap();
        let mut platform = Platform::default();
        platform.load_from_file(&path).unwrap();
        assert_eq!(platform.int_bit, 16);
    }

    #[test]
    fn set_applies_presets_by_label() {
        let mut platform = Platform::default();
        platform.set("win64", &[], false).unwrap();
        assert_eq!(platform, Platform::win64());
        platform.set("unix32", &[], false).unwrap();
        assert_eq!(platform, Platform::unix32());
    }

    #[test]
    fn set_unknown_name_reports_and_preserves() {
        let dir = tempfile::tempdir().unwrap();
        let mut platform = Platform::unix64();
        let err = platform
            .set(
                "nonexistent-platform-xyz",
                &[dir.path().to_path_buf()],
                false,
            )
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized platform: 'nonexistent-platform-xyz'"
        );
        assert_eq!(platform, Platform::unix64());
    }

    #[test]
    fn platform_file_label_is_not_a_preset() {
        let mut platform = Platform::default();
        let err = platform.set("platformFile", &[], false).unwrap_err();
        assert!(matches!(err, PlatformError::UnknownPlatform { .. }));
    }

    #[test]
    fn set_literal_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, SIXTEEN_BIT).unwrap();
        let mut platform = Platform::default();
        platform.set(path.to_str().unwrap(), &[], false).unwrap();
        assert_eq!(platform.ty, PlatformType::File);
    }

    #[test]
    fn set_completes_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("board.toml"), SIXTEEN_BIT).unwrap();
        let mut platform = Platform::default();
        platform
            .set("board", &[dir.path().to_path_buf()], false)
            .unwrap();
        assert_eq!(platform.ty, PlatformType::File);
    }

    #[test]
    fn set_searches_platforms_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("platforms");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("board.toml"), SIXTEEN_BIT).unwrap();
        let mut platform = Platform::default();
        platform
            .set("board", &[dir.path().to_path_buf()], false)
            .unwrap();
        assert_eq!(platform.ty, PlatformType::File);
    }

    #[test]
    fn lookup_probes_in_order() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let mut trace = RecordingTrace::default();
        let mut platform = Platform::default();
        let err = platform
            .set_with_trace(
                "ghost",
                &[dir_a.path().to_path_buf(), dir_b.path().to_path_buf()],
                &mut trace,
            )
            .unwrap_err();
        assert!(matches!(err, PlatformError::UnknownPlatform { .. }));
        assert_eq!(platform, Platform::default());

        let expected: Vec<PathBuf> = vec![
            PathBuf::from("ghost"),
            PathBuf::from("ghost.toml"),
            Path::new("platforms").join("ghost"),
            Path::new("platforms").join("ghost.toml"),
            dir_a.path().join("ghost"),
            dir_a.path().join("ghost.toml"),
            dir_a.path().join("platforms").join("ghost"),
            dir_a.path().join("platforms").join("ghost.toml"),
            dir_b.path().join("ghost"),
            dir_b.path().join("ghost.toml"),
            dir_b.path().join("platforms").join("ghost"),
            dir_b.path().join("platforms").join("ghost.toml"),
        ];
        // The executable-directory candidates follow these.
        assert!(trace.events.len() >= expected.len());
        for (i, path) in expected.iter().enumerate() {
            assert_eq!(&trace.events[i].0, path, "candidate {i}");
        }
        assert!(trace
            .events
            .iter()
            .all(|(_, outcome)| *outcome == LookupOutcome::NotFound));
    }

    #[test]
    fn parse_error_moves_to_next_candidate() {
        let bad_dir = tempfile::tempdir().unwrap();
        let good_dir = tempfile::tempdir().unwrap();
        std::fs::write(bad_dir.path().join("board.toml"), "not toml [[[").unwrap();
        std::fs::write(good_dir.path().join("board.toml"), SIXTEEN_BIT).unwrap();

        let mut trace = RecordingTrace::default();
        let mut platform = Platform::default();
        platform
            .set_with_trace(
                "board",
                &[bad_dir.path().to_path_buf(), good_dir.path().to_path_buf()],
                &mut trace,
            )
            .unwrap();
        assert_eq!(platform.ty, PlatformType::File);
        assert_eq!(platform.int_bit, 16);

        let bad = bad_dir.path().join("board.toml");
        let good = good_dir.path().join("board.toml");
        assert!(trace.events.contains(&(bad, LookupOutcome::ParseError)));
        assert_eq!(trace.events.last(), Some(&(good, LookupOutcome::Loaded)));
    }

    #[test]
    fn discover_finds_sorted_toml_files() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("platforms");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("msp430.toml"), SIXTEEN_BIT).unwrap();
        std::fs::write(sub.join("avr8.toml"), SIXTEEN_BIT).unwrap();
        std::fs::write(sub.join("notes.txt"), "ignore me").unwrap();

        let found = discover_platforms(dir.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0, "avr8");
        assert_eq!(found[1].0, "msp430");
    }

    #[test]
    fn discover_without_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_platforms(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn template_parses_back() {
        let text = generate_template(PlatformType::Unix64).unwrap();
        let mut platform = Platform::default();
        platform.load_from_str(&text).unwrap();
        assert_eq!(
            PlatformFile::from(&platform),
            PlatformFile::from(&Platform::unix64())
        );
    }

    #[test]
    fn template_rejects_file_type() {
        assert!(matches!(
            generate_template(PlatformType::File),
            Err(PlatformError::NotAPreset(PlatformType::File))
        ));
    }

    #[test]
    fn shipped_samples_load() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
        let found = discover_platforms(&root).unwrap();
        assert!(found.iter().any(|(name, _)| name == "avr8"));
        assert!(found.iter().any(|(name, _)| name == "mips32"));
        for (name, path) in &found {
            let mut platform = Platform::default();
            platform
                .load_from_file(path)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(platform.ty, PlatformType::File);
        }
    }

    #[test]
    fn set_resolves_shipped_sample() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
        let mut platform = Platform::default();
        platform.set("avr8", &[root], false).unwrap();
        assert_eq!(platform.int_bit, 16);
        assert_eq!(platform.sizeof_double, 4);
        assert_eq!(platform.sizeof_pointer, 2);
        assert_eq!(platform.default_sign, DefaultSign::Signed);
    }
}
