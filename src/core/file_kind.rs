//! Source file kinds recognised by the transform.
//!
//! The kind is derived once from the file path and only decides which syntax
//! extensions the parser enables. File contents are never sniffed.

use swc_ecma_parser::{Syntax, TsSyntax};

/// A supported source file kind, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Js,
    Jsx,
    Ts,
    Tsx,
    /// Script content of a Vue single-file component.
    Vue,
    /// Script content of a Svelte component.
    Svelte,
}

impl FileKind {
    pub const ALL: [FileKind; 6] = [
        FileKind::Js,
        FileKind::Jsx,
        FileKind::Ts,
        FileKind::Tsx,
        FileKind::Vue,
        FileKind::Svelte,
    ];

    /// Detect the kind from the text after the last `.` of `path`.
    ///
    /// Matching is case-sensitive, and anything after the extension (such as a
    /// `?query` suffix) makes the path unsupported.
    ///
    /// ```
    /// use keep_console::FileKind;
    ///
    /// assert_eq!(FileKind::from_path("src/App.tsx"), Some(FileKind::Tsx));
    /// assert_eq!(FileKind::from_path("styles/site.css"), None);
    /// assert_eq!(FileKind::from_path("src/main.js?v=42"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        let (_, extension) = path.rsplit_once('.')?;
        Self::from_extension(extension)
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "js" => Some(FileKind::Js),
            "jsx" => Some(FileKind::Jsx),
            "ts" => Some(FileKind::Ts),
            "tsx" => Some(FileKind::Tsx),
            "vue" => Some(FileKind::Vue),
            "svelte" => Some(FileKind::Svelte),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Js => "js",
            FileKind::Jsx => "jsx",
            FileKind::Ts => "ts",
            FileKind::Tsx => "tsx",
            FileKind::Vue => "vue",
            FileKind::Svelte => "svelte",
        }
    }

    /// Parser syntax for this kind.
    ///
    /// Every kind parses as TypeScript with legacy decorators, which covers plain
    /// JavaScript too. JSX is on everywhere except `.ts`: this deliberately gives up
    /// the one-superset-for-all rule, because with JSX on a `<T>value` type assertion
    /// no longer parses. A `.ts` file containing JSX is a parse error.
    pub fn syntax(self) -> Syntax {
        Syntax::Typescript(TsSyntax {
            tsx: self != FileKind::Ts,
            decorators: true,
            ..Default::default()
        })
    }
}
