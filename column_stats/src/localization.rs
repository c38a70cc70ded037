#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct LocalizableString {
    pub english: String,
}
impl LocalizableString {
    pub fn localize(self, language: Language) -> String {
        match language {
            Language::English => self.english,
        }
    }
}

#[derive(Clone, Copy)]
pub struct LocalizableStr<'a> {
    pub english: &'a str,
}
impl<'a> LocalizableStr<'a> {
    pub fn localize(&self, language: Language) -> &'a str {
        match language {
            Language::English => self.english,
        }
    }
}

#[derive(Clone, Copy, serde::Deserialize, serde::Serialize, Default, PartialEq, Debug)]
pub enum Language {
    #[default]
    English,
}

pub(crate) const SELECT_FILE: LocalizableStr<'static> = LocalizableStr {
    english: "Select TXT file:",
};
pub(crate) const BROWSE: LocalizableStr<'static> = LocalizableStr { english: "Browse" };
pub(crate) const FILE_FILTER: LocalizableStr<'static> = LocalizableStr {
    english: "TXT files",
};
pub(crate) const ENTER_COLUMN: LocalizableStr<'static> = LocalizableStr {
    english: "Enter Column Name:",
};
pub(crate) const CALCULATE: LocalizableStr<'static> = LocalizableStr {
    english: "Calculate",
};
pub(crate) const CLEAR: LocalizableStr<'static> = LocalizableStr { english: "Clear" };
pub(crate) const FILE_MENU: LocalizableStr<'static> = LocalizableStr { english: "File" };
pub(crate) const QUIT: LocalizableStr<'static> = LocalizableStr { english: "Quit" };
pub(crate) const ERROR: LocalizableStr<'static> = LocalizableStr { english: "Error" };
pub(crate) const OK: LocalizableStr<'static> = LocalizableStr { english: "Ok" };

#[test]
fn english_labels() {
    assert_eq!(CALCULATE.localize(Language::English), "Calculate");
    let s = LocalizableString {
        english: "Column 'x' not found".into(),
    };
    assert_eq!(s.localize(Language::default()), "Column 'x' not found");
}
