//! # Romaji Table
//!
//! ## Overview
//!
//! The static romanization table: each row maps one romanized syllable onto its
//! hiragana and katakana spellings. Lookups prefer the longest romanization, so
//! `"kyo"` resolves as one syllable rather than as `"ki"` followed by stray letters.

/// One table row: a romanized syllable and its kana spellings.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Syllable {
    pub romaji: &'static str,
    pub hira: &'static str,
    pub kata: &'static str,
}

const fn syl(romaji: &'static str, hira: &'static str, kata: &'static str) -> Syllable {
    Syllable { romaji, hira, kata }
}

/// Length of the longest romanization in the table.
const MAX_ROMAJI_LEN: usize = 3;

pub(crate) static SYLLABLES: &[Syllable] = &[
    // Plain vowels.
    syl("a", "あ", "ア"),
    syl("i", "い", "イ"),
    syl("u", "う", "ウ"),
    syl("e", "え", "エ"),
    syl("o", "お", "オ"),
    // K row.
    syl("ka", "か", "カ"),
    syl("ki", "き", "キ"),
    syl("ku", "く", "ク"),
    syl("ke", "け", "ケ"),
    syl("ko", "こ", "コ"),
    syl("kya", "きゃ", "キャ"),
    syl("kyu", "きゅ", "キュ"),
    syl("kyo", "きょ", "キョ"),
    // G row.
    syl("ga", "が", "ガ"),
    syl("gi", "ぎ", "ギ"),
    syl("gu", "ぐ", "グ"),
    syl("ge", "げ", "ゲ"),
    syl("go", "ご", "ゴ"),
    syl("gya", "ぎゃ", "ギャ"),
    syl("gyu", "ぎゅ", "ギュ"),
    syl("gyo", "ぎょ", "ギョ"),
    // S row, with both Hepburn and wapuro spellings for し.
    syl("sa", "さ", "サ"),
    syl("si", "し", "シ"),
    syl("shi", "し", "シ"),
    syl("su", "す", "ス"),
    syl("se", "せ", "セ"),
    syl("so", "そ", "ソ"),
    syl("sha", "しゃ", "シャ"),
    syl("shu", "しゅ", "シュ"),
    syl("sho", "しょ", "ショ"),
    syl("she", "しぇ", "シェ"),
    syl("sya", "しゃ", "シャ"),
    syl("syu", "しゅ", "シュ"),
    syl("syo", "しょ", "ショ"),
    // Z row.
    syl("za", "ざ", "ザ"),
    syl("zi", "じ", "ジ"),
    syl("ji", "じ", "ジ"),
    syl("zu", "ず", "ズ"),
    syl("ze", "ぜ", "ゼ"),
    syl("zo", "ぞ", "ゾ"),
    syl("ja", "じゃ", "ジャ"),
    syl("ju", "じゅ", "ジュ"),
    syl("jo", "じょ", "ジョ"),
    syl("je", "じぇ", "ジェ"),
    syl("jya", "じゃ", "ジャ"),
    syl("jyu", "じゅ", "ジュ"),
    syl("jyo", "じょ", "ジョ"),
    syl("zya", "じゃ", "ジャ"),
    syl("zyu", "じゅ", "ジュ"),
    syl("zyo", "じょ", "ジョ"),
    // T row, with both Hepburn and wapuro spellings for ち and つ.
    syl("ta", "た", "タ"),
    syl("ti", "ち", "チ"),
    syl("chi", "ち", "チ"),
    syl("tu", "つ", "ツ"),
    syl("tsu", "つ", "ツ"),
    syl("te", "て", "テ"),
    syl("to", "と", "ト"),
    syl("cha", "ちゃ", "チャ"),
    syl("chu", "ちゅ", "チュ"),
    syl("cho", "ちょ", "チョ"),
    syl("che", "ちぇ", "チェ"),
    syl("tya", "ちゃ", "チャ"),
    syl("tyu", "ちゅ", "チュ"),
    syl("tyo", "ちょ", "チョ"),
    // D row.
    syl("da", "だ", "ダ"),
    syl("di", "ぢ", "ヂ"),
    syl("du", "づ", "ヅ"),
    syl("de", "で", "デ"),
    syl("do", "ど", "ド"),
    syl("dya", "ぢゃ", "ヂャ"),
    syl("dyu", "ぢゅ", "ヂュ"),
    syl("dyo", "ぢょ", "ヂョ"),
    // N row.
    syl("na", "な", "ナ"),
    syl("ni", "に", "ニ"),
    syl("nu", "ぬ", "ヌ"),
    syl("ne", "ね", "ネ"),
    syl("no", "の", "ノ"),
    syl("nya", "にゃ", "ニャ"),
    syl("nyu", "にゅ", "ニュ"),
    syl("nyo", "にょ", "ニョ"),
    // Syllabic n.
    syl("nn", "ん", "ン"),
    // H row, with both Hepburn and wapuro spellings for ふ.
    syl("ha", "は", "ハ"),
    syl("hi", "ひ", "ヒ"),
    syl("hu", "ふ", "フ"),
    syl("fu", "ふ", "フ"),
    syl("he", "へ", "ヘ"),
    syl("ho", "ほ", "ホ"),
    syl("hya", "ひゃ", "ヒャ"),
    syl("hyu", "ひゅ", "ヒュ"),
    syl("hyo", "ひょ", "ヒョ"),
    syl("fa", "ふぁ", "ファ"),
    syl("fi", "ふぃ", "フィ"),
    syl("fe", "ふぇ", "フェ"),
    syl("fo", "ふぉ", "フォ"),
    // B row.
    syl("ba", "ば", "バ"),
    syl("bi", "び", "ビ"),
    syl("bu", "ぶ", "ブ"),
    syl("be", "べ", "ベ"),
    syl("bo", "ぼ", "ボ"),
    syl("bya", "びゃ", "ビャ"),
    syl("byu", "びゅ", "ビュ"),
    syl("byo", "びょ", "ビョ"),
    // P row.
    syl("pa", "ぱ", "パ"),
    syl("pi", "ぴ", "ピ"),
    syl("pu", "ぷ", "プ"),
    syl("pe", "ぺ", "ペ"),
    syl("po", "ぽ", "ポ"),
    syl("pya", "ぴゃ", "ピャ"),
    syl("pyu", "ぴゅ", "ピュ"),
    syl("pyo", "ぴょ", "ピョ"),
    // M row.
    syl("ma", "ま", "マ"),
    syl("mi", "み", "ミ"),
    syl("mu", "む", "ム"),
    syl("me", "め", "メ"),
    syl("mo", "も", "モ"),
    syl("mya", "みゃ", "ミャ"),
    syl("myu", "みゅ", "ミュ"),
    syl("myo", "みょ", "ミョ"),
    // Y row.
    syl("ya", "や", "ヤ"),
    syl("yu", "ゆ", "ユ"),
    syl("yo", "よ", "ヨ"),
    // R row.
    syl("ra", "ら", "ラ"),
    syl("ri", "り", "リ"),
    syl("ru", "る", "ル"),
    syl("re", "れ", "レ"),
    syl("ro", "ろ", "ロ"),
    syl("rya", "りゃ", "リャ"),
    syl("ryu", "りゅ", "リュ"),
    syl("ryo", "りょ", "リョ"),
    // W row, with modern spellings for the i and e vowels.
    syl("wa", "わ", "ワ"),
    syl("wi", "うぃ", "ウィ"),
    syl("we", "うぇ", "ウェ"),
    syl("wo", "を", "ヲ"),
    // V row.
    syl("va", "ゔぁ", "ヴァ"),
    syl("vi", "ゔぃ", "ヴィ"),
    syl("vu", "ゔ", "ヴ"),
    syl("ve", "ゔぇ", "ヴェ"),
    syl("vo", "ゔぉ", "ヴォ"),
    // Small kana.
    syl("xa", "ぁ", "ァ"),
    syl("xi", "ぃ", "ィ"),
    syl("xu", "ぅ", "ゥ"),
    syl("xe", "ぇ", "ェ"),
    syl("xo", "ぉ", "ォ"),
    syl("xya", "ゃ", "ャ"),
    syl("xyu", "ゅ", "ュ"),
    syl("xyo", "ょ", "ョ"),
    syl("xtu", "っ", "ッ"),
    syl("la", "ぁ", "ァ"),
    syl("li", "ぃ", "ィ"),
    syl("lu", "ぅ", "ゥ"),
    syl("le", "ぇ", "ェ"),
    syl("lo", "ぉ", "ォ"),
    syl("lya", "ゃ", "ャ"),
    syl("lyu", "ゅ", "ュ"),
    syl("lyo", "ょ", "ョ"),
    syl("ltu", "っ", "ッ"),
    // The long-vowel mark.
    syl("-", "ー", "ー"),
    // Digits become their fullwidth forms in either script.
    syl("0", "０", "０"),
    syl("1", "１", "１"),
    syl("2", "２", "２"),
    syl("3", "３", "３"),
    syl("4", "４", "４"),
    syl("5", "５", "５"),
    syl("6", "６", "６"),
    syl("7", "７", "７"),
    syl("8", "８", "８"),
    syl("9", "９", "９"),
];

/// Find the row for the longest romanization starting `input`.
pub(crate) fn lookup(input: &str) -> Option<&'static Syllable> {
    for len in (1..=MAX_ROMAJI_LEN).rev() {
        if let Some(part) = input.get(..len) {
            if let Some(row) = SYLLABLES.iter().find(|row| row.romaji == part) {
                return Some(row);
            }
        }
    }

    return None;
}

/// Iterate over the rows whose romanization begins with `partial`.
pub(crate) fn completions(partial: &str) -> impl Iterator<Item = &'static Syllable> + '_ {
    SYLLABLES.iter().filter(move |row| row.romaji.starts_with(partial))
}
