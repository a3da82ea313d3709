//! Built-in records: the small Bukhari sample used when no corpus source
//! answers, and the hand-tagged guidance set the matcher ranks.

use noor_core::{Record, Result, TextFields};

pub const FALLBACK_COLLECTION: &str = "sahih-bukhari";
pub const FALLBACK_SIZE: u32 = 40;

/// 40 placeholder Bukhari records. The first carries the real text of
/// hadith 1; the rest are demo text so paging can be exercised.
pub fn fallback_sample() -> Vec<Record> {
    (1..=FALLBACK_SIZE)
        .filter_map(|n| fallback_record(n).ok())
        .collect()
}

fn fallback_record(number: u32) -> Result<Record> {
    let id = format!("{FALLBACK_COLLECTION}-{number}");
    let reference = format!("Bukhari {number}");
    if number == 1 {
        let fields = TextFields::new(
            "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ",
            "اعمال کا دارومدار نیتوں پر ہے۔",
            "Actions are only by intentions.",
        );
        return Ok(Record::new(id, FALLBACK_COLLECTION, number, fields)?
            .with_reference(reference)
            .with_note("Foundational hadith on sincerity."));
    }
    let fields = TextFields::new(
        "نَصُّ حَدِيثٍ عَرَبِيٍّ لِلتَّجْرِبَةِ",
        "نمائشی حدیث کے ساتھ اردو ترجمہ",
        "Sample hadith with Urdu and English translation.",
    );
    Ok(Record::new(id, FALLBACK_COLLECTION, number, fields)?.with_reference(reference))
}

/// Tagged records for the guidance matcher.
pub fn guidance_sample() -> Vec<Record> {
    let entries: [(&str, &str, u32, [&str; 3], &[&str], &str); 3] = [
        (
            "bukhari-13",
            "sahih-bukhari",
            13,
            [
                "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ",
                "اعمال کا دار و مدار نیتوں پر ہے۔",
                "Actions are but by intentions.",
            ],
            &["intention", "sincerity", "niyyah"],
            "Foundational hadith on sincerity in all actions.",
        ),
        (
            "muslim-2622",
            "sahih-muslim",
            2622,
            ["لاَ تَغْضَبْ", "غصہ نہ کرو۔", "Do not become angry."],
            &["anger", "patience", "sabr", "character"],
            "Brief counsel emphasizing self-restraint.",
        ),
        (
            "tirmidhi-1209",
            "jami-tirmidhi",
            1209,
            [
                "الْبَيْعَانِ بِالْخِيَارِ",
                "خرید و فروخت کرنے والے دونوں کو اختیار ہے۔",
                "The buyer and the seller have the option (to cancel) as long as they have not separated.",
            ],
            &["business", "trade", "honesty"],
            "Guidance regarding business ethics and consent.",
        ),
    ];
    entries
        .into_iter()
        .filter_map(|(id, collection, number, [ar, ur, en], tags, note)| {
            Record::new(id, collection, number, TextFields::new(ar, ur, en))
                .ok()
                .map(|r| r.with_tags(tags.iter().copied()).with_note(note))
        })
        .collect()
}
