//! C and C++ language standard editions.
//!
//! Limit-macro generation only needs to know which edition a translation
//! unit is compiled as; in particular `long long` limits exist from C99 and
//! C++11 on.

use std::fmt;

/// C standard editions, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CStd {
    C89,
    C99,
    C11,
    C17,
    C23,
}

impl CStd {
    /// The most recent supported edition.
    pub fn latest() -> Self {
        CStd::C23
    }

    /// The flag-style label, e.g. `"c99"`.
    pub fn as_str(self) -> &'static str {
        match self {
            CStd::C89 => "c89",
            CStd::C99 => "c99",
            CStd::C11 => "c11",
            CStd::C17 => "c17",
            CStd::C23 => "c23",
        }
    }

    /// Inverse of [`as_str`][Self::as_str].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "c89" => Some(CStd::C89),
            "c99" => Some(CStd::C99),
            "c11" => Some(CStd::C11),
            "c17" => Some(CStd::C17),
            "c23" => Some(CStd::C23),
            _ => None,
        }
    }
}

impl fmt::Display for CStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// C++ standard editions, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CppStd {
    Cpp03,
    Cpp11,
    Cpp14,
    Cpp17,
    Cpp20,
    Cpp23,
    Cpp26,
}

impl CppStd {
    /// The most recent supported edition.
    pub fn latest() -> Self {
        CppStd::Cpp26
    }

    /// The flag-style label, e.g. `"c++11"`.
    pub fn as_str(self) -> &'static str {
        match self {
            CppStd::Cpp03 => "c++03",
            CppStd::Cpp11 => "c++11",
            CppStd::Cpp14 => "c++14",
            CppStd::Cpp17 => "c++17",
            CppStd::Cpp20 => "c++20",
            CppStd::Cpp23 => "c++23",
            CppStd::Cpp26 => "c++26",
        }
    }

    /// Inverse of [`as_str`][Self::as_str].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "c++03" => Some(CppStd::Cpp03),
            "c++11" => Some(CppStd::Cpp11),
            "c++14" => Some(CppStd::Cpp14),
            "c++17" => Some(CppStd::Cpp17),
            "c++20" => Some(CppStd::Cpp20),
            "c++23" => Some(CppStd::Cpp23),
            "c++26" => Some(CppStd::Cpp26),
            _ => None,
        }
    }
}

impl fmt::Display for CppStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The language and edition a translation unit is compiled as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    C(CStd),
    Cpp(CppStd),
}

impl Standard {
    /// Parse either a C or a C++ edition label.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(c) = CStd::from_name(name) {
            return Some(Standard::C(c));
        }
        CppStd::from_name(name).map(Standard::Cpp)
    }

    /// The flag-style label of the edition.
    pub fn as_str(self) -> &'static str {
        match self {
            Standard::C(c) => c.as_str(),
            Standard::Cpp(cpp) => cpp.as_str(),
        }
    }

    /// Whether `long long` and its limit macros exist in this edition.
    pub fn has_long_long(self) -> bool {
        match self {
            Standard::C(c) => c >= CStd::C99,
            Standard::Cpp(cpp) => cpp >= CppStd::Cpp11,
        }
    }
}

impl Default for Standard {
    fn default() -> Self {
        Standard::C(CStd::latest())
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
