use serde::Serialize;

/// One vocabulary entry. The filename is the stable identity used in both the
/// canonical and published directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabItem {
    pub text: String,
    pub filename: String,
}

impl VocabItem {
    pub fn new(text: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filename: filename.into(),
        }
    }
}

/// The Thai tone cheat sheet vocabulary, in presentation order.
pub fn default_vocabulary() -> Vec<VocabItem> {
    [
        ("กา", "ka-samanj.mp3"),
        ("ก่า", "ka-ek.mp3"),
        ("ก้า", "ka-tho.mp3"),
        ("ก๊า", "ka-tri.mp3"),
        ("ก๋า", "ka-jatwa.mp3"),
        ("จะ", "ja-ek.mp3"),
        ("จ้ะ", "ja-tho.mp3"),
        ("จ๊ะ", "ja-tri.mp3"),
        ("จ๋ะ", "ja-jatwa.mp3"),
        ("ขา", "kha-long-jatwa.mp3"),
        ("ข่า", "kha-long-ek.mp3"),
        ("ข้า", "kha-long-tho.mp3"),
        ("ขะ", "kha-short-ek.mp3"),
        ("ข้ะ", "kha-short-tho.mp3"),
        ("คา", "kha-low-samanj.mp3"),
        ("ค่า", "kha-low-tho.mp3"),
        ("ค้า", "kha-low-tri.mp3"),
        ("คะ", "kha-short-low-tri.mp3"),
        ("ค่ะ", "kha-short-low-tho.mp3"),
        ("ค๋ะ", "kha-short-low-jatwa.mp3"),
        ("โคก", "khok-tho.mp3"),
        ("โค้ก", "khohk-tri.mp3"),
    ]
    .into_iter()
    .map(|(text, filename)| VocabItem::new(text, filename))
    .collect()
}
