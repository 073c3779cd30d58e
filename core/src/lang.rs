use std::str::FromStr;

use strum::IntoEnumIterator as _;

/// Canonical languages which a problem file can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Lang {
    #[strum(serialize = "C")]
    C,
    #[strum(serialize = "C++")]
    Cpp,
    #[strum(serialize = "Python")]
    Python,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LangDescriptor {
    /// Canonical identifier, which is also the file extension.
    pub id: &'static str,
    pub comment_open: &'static str,
    pub comment_close: &'static str,
    pub indent: &'static str,
    /// Lowercase tokens accepted on the command line. Always contains `id`.
    pub aliases: &'static [&'static str],
}

static C: LangDescriptor = LangDescriptor {
    id: "c",
    comment_open: "/*",
    comment_close: "*/",
    indent: "\t",
    aliases: &["c"],
};

static CPP: LangDescriptor = LangDescriptor {
    id: "cpp",
    comment_open: "/*",
    comment_close: "*/",
    indent: "\t",
    aliases: &["cpp", "c++", "cc"],
};

static PYTHON: LangDescriptor = LangDescriptor {
    id: "py",
    comment_open: "\"\"\"",
    comment_close: "\"\"\"",
    indent: "    ",
    aliases: &["py", "python", "python3"],
};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language '{0}'")]
pub struct UnsupportedLang(pub String);

impl Lang {
    pub fn descriptor(&self) -> &'static LangDescriptor {
        match self {
            Lang::C => &C,
            Lang::Cpp => &CPP,
            Lang::Python => &PYTHON,
        }
    }

    pub fn id(&self) -> &'static str {
        self.descriptor().id
    }

    pub fn extension(&self) -> &'static str {
        self.descriptor().id
    }

    /// Normalize a user-given token such as "c++" or "Python" into a canonical language.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        Self::iter().find(|lang| lang.descriptor().aliases.contains(&token.as_str()))
    }
}

impl FromStr for Lang {
    type Err = UnsupportedLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnsupportedLang(s.to_owned()))
    }
}
