//! Minimal reader for Valve's KeyValues text format
//!
//! Only what Steam library discovery needs: `libraryfolders.vdf` and
//! `appmanifest_*.acf`. Keys are matched case-insensitively, as Steam
//! itself does.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum VdfNode {
    Value(String),
    Section(HashMap<String, VdfNode>),
}

impl VdfNode {
    pub fn get(&self, key: &str) -> Option<&VdfNode> {
        match self {
            VdfNode::Section(map) => map.get(&key.to_ascii_lowercase()),
            VdfNode::Value(_) => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            VdfNode::Value(value) => Some(value.as_str()),
            VdfNode::Section(_) => None,
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &VdfNode> {
        let map = match self {
            VdfNode::Section(map) => Some(map),
            VdfNode::Value(_) => None,
        };
        map.into_iter()
            .flat_map(|m| m.values())
            .filter(|node| matches!(node, VdfNode::Section(_)))
    }
}

#[derive(Debug, PartialEq)]
enum Token {
    Str(String),
    Open,
    Close,
}

fn tokenize(content: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => tokens.push(Token::Open),
            '}' => tokens.push(Token::Close),
            '"' => {
                let mut value = String::new();
                loop {
                    match chars.next()? {
                        '"' => break,
                        '\\' => match chars.next()? {
                            'n' => value.push('\n'),
                            't' => value.push('\t'),
                            '\\' => value.push('\\'),
                            '"' => value.push('"'),
                            other => {
                                value.push('\\');
                                value.push(other);
                            }
                        },
                        other => value.push(other),
                    }
                }
                tokens.push(Token::Str(value));
            }
            '/' if chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    Some(tokens)
}

fn parse_section<I: Iterator<Item = Token>>(tokens: &mut I, nested: bool) -> Option<VdfNode> {
    let mut map = HashMap::new();

    loop {
        match tokens.next() {
            None if nested => return None,
            None | Some(Token::Close) => break,
            Some(Token::Open) => return None,
            Some(Token::Str(key)) => {
                let node = match tokens.next()? {
                    Token::Str(value) => VdfNode::Value(value),
                    Token::Open => parse_section(tokens, true)?,
                    Token::Close => return None,
                };
                map.insert(key.to_ascii_lowercase(), node);
            }
        }
    }

    Some(VdfNode::Section(map))
}

/// Parse a whole document; `None` on unbalanced braces or dangling keys
pub fn parse_vdf(content: &str) -> Option<VdfNode> {
    let mut tokens = tokenize(content)?.into_iter();
    parse_section(&mut tokens, false)
}

/// The fields of an `appmanifest_<id>.acf` that matter here
#[derive(Debug, Clone)]
pub struct AppManifest {
    pub app_id: String,
    pub install_dir: String,
    pub state_flags: u32,
}

impl AppManifest {
    pub fn from_vdf(content: &str) -> Option<Self> {
        let root = parse_vdf(content)?;
        let state = root.get("AppState")?;

        Some(Self {
            app_id: state.get_str("appid")?.to_string(),
            install_dir: state.get_str("installdir")?.to_string(),
            state_flags: state
                .get_str("StateFlags")
                .and_then(|flags| flags.parse().ok())
                .unwrap_or(0),
        })
    }

    /// StateFlags bit 4 is "fully installed"
    pub fn is_installed(&self) -> bool {
        self.state_flags & 4 != 0
    }
}

/// Library roots listed in `libraryfolders.vdf`
pub fn parse_library_folders(content: &str) -> Vec<String> {
    let Some(root) = parse_vdf(content) else {
        return Vec::new();
    };
    let Some(folders) = root.get("libraryfolders") else {
        return Vec::new();
    };

    folders
        .sections()
        .filter_map(|folder| folder.get_str("path"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_marvel_rivals_manifest() {
        let content = r#"
"AppState"
{
    "appid"         "2767030"
    "Universe"      "1"
    "name"          "Marvel Rivals"
    "StateFlags"    "4"
    "installdir"    "MarvelRivals"
}
"#;
        let manifest = AppManifest::from_vdf(content).unwrap();
        assert_eq!(manifest.app_id, "2767030");
        assert_eq!(manifest.install_dir, "MarvelRivals");
        assert!(manifest.is_installed());
    }

    #[test]
    fn updating_manifest_is_not_installed() {
        let content = r#""AppState" { "appid" "2767030" "StateFlags" "2" "installdir" "MarvelRivals" }"#;
        let manifest = AppManifest::from_vdf(content).unwrap();
        assert!(!manifest.is_installed());
    }

    #[test]
    fn parses_library_folders_with_comments() {
        let content = r#"
// written by Steam
"libraryfolders"
{
    "contentstatsid"    "123"
    "0"
    {
        "path"      "/home/user/.local/share/Steam"
        "label"     ""
    }
    "1"
    {
        "path"      "/mnt/games/SteamLibrary"
        "apps" { "2767030" "1000" }
    }
}
"#;
        let mut paths = parse_library_folders(content);
        paths.sort();
        assert_eq!(paths, vec!["/home/user/.local/share/Steam", "/mnt/games/SteamLibrary"]);
    }

    #[test]
    fn unbalanced_document_is_rejected() {
        assert!(parse_vdf(r#""AppState" { "appid" "1""#).is_none());
        assert!(parse_library_folders("garbage {").is_empty());
    }
}
