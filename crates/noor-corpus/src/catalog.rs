//! The collections the site knows about, with their full sizes and the
//! handful of records shipped in memory for each.

use noor_core::{Collection, Error, Record, Result, TextFields};

pub struct Catalog {
    collections: Vec<Collection>,
}

struct SampleEntry {
    number: u32,
    reference: &'static str,
    ar: &'static str,
    ur: &'static str,
    en: &'static str,
    note: Option<&'static str>,
}

impl Catalog {
    pub fn new(collections: Vec<Collection>) -> Self {
        Self { collections }
    }

    /// The six canonical collections, each with its sample records.
    pub fn builtin() -> Self {
        let collections = vec![
            build(
                "sahih-bukhari",
                "Sahih al-Bukhari",
                7563,
                &[
                    SampleEntry {
                        number: 1,
                        reference: "Bukhari 1: Intentions",
                        ar: "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ",
                        ur: "اعمال کا دار و مدار نیتوں پر ہے۔",
                        en: "Actions are but by intentions.",
                        note: Some("This hadith sets the foundation of sincerity in Islam."),
                    },
                    SampleEntry {
                        number: 2,
                        reference: "Bukhari 2: Islam, Iman, Ihsan",
                        ar: "الإِسْلاَمُ بُنِيَ عَلَى خَمْسٍ",
                        ur: "اسلام پانچ چیزوں پر قائم ہے۔",
                        en: "Islam is built upon five (pillars).",
                        note: None,
                    },
                ],
            ),
            build(
                "sahih-muslim",
                "Sahih Muslim",
                5362,
                &[SampleEntry {
                    number: 2622,
                    reference: "Muslim 2622: Anger",
                    ar: "لاَ تَغْضَبْ",
                    ur: "غصہ نہ کرو۔",
                    en: "Do not become angry.",
                    note: None,
                }],
            ),
            build(
                "jami-tirmidhi",
                "Jamiʿ at-Tirmidhi",
                3891,
                &[SampleEntry {
                    number: 1209,
                    reference: "Tirmidhi 1209: Trade",
                    ar: "الْبَيْعَانِ بِالْخِيَارِ",
                    ur: "خرید و فروخت کرنے والے دونوں کو اختیار ہے۔",
                    en: "The buyer and the seller have the option as long as they have not separated.",
                    note: None,
                }],
            ),
            build(
                "sunan-abu-dawood",
                "Sunan Abu Dawood",
                5274,
                &[SampleEntry {
                    number: 4940,
                    reference: "Abu Dawood 4940: Character",
                    ar: "إِنَّ مِنْ خِيَارِكُمْ أَحْسَنَكُمْ أَخْلَاقًا",
                    ur: "تم میں سے بہترین وہ ہے جس کے اخلاق اچھے ہوں۔",
                    en: "The best among you are those with the best character.",
                    note: None,
                }],
            ),
            build(
                "sunan-an-nasai",
                "Sunan an-Nasa'i",
                5662,
                &[SampleEntry {
                    number: 4998,
                    reference: "an-Nasa'i 4998: Trust",
                    ar: "أَدِّ الأَمَانَةَ إِلَى مَنِ ائْتَمَنَكَ",
                    ur: "امانت اس تک پہنچاؤ جس نے تم پر اعتماد کیا۔",
                    en: "Render the trust to the one who entrusted you.",
                    note: None,
                }],
            ),
            build(
                "sunan-ibn-majah",
                "Sunan Ibn Majah",
                4341,
                &[SampleEntry {
                    number: 4210,
                    reference: "Ibn Majah 4210: Truthfulness",
                    ar: "عَلَيْكُمْ بِالصِّدْقِ",
                    ur: "تم پر سچ لازم ہے۔",
                    en: "Adhere to truthfulness.",
                    note: None,
                }],
            ),
        ];
        Self { collections }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn get(&self, key: &str) -> Result<&Collection> {
        self.collections
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| Error::NotFound(format!("collection '{key}'")))
    }

    /// Swap in a freshly loaded corpus for `key`, e.g. after a `ready` load.
    pub fn replace_records(&mut self, key: &str, records: Vec<Record>) -> Result<()> {
        let collection = self
            .collections
            .iter_mut()
            .find(|c| c.key == key)
            .ok_or_else(|| Error::NotFound(format!("collection '{key}'")))?;
        collection.records = records;
        Ok(())
    }

    /// Sum of expected sizes across all collections.
    pub fn expected_total(&self) -> usize {
        self.collections.iter().map(|c| c.expected_count).sum()
    }
}

fn build(key: &str, title: &str, expected_count: usize, entries: &[SampleEntry]) -> Collection {
    let records = entries
        .iter()
        .filter_map(|e| {
            let fields = TextFields::new(e.ar, e.ur, e.en);
            let record = Record::new(format!("{key}-{}", e.number), key, e.number, fields).ok()?;
            let record = record.with_reference(e.reference);
            Some(match e.note {
                Some(note) => record.with_note(note),
                None => record,
            })
        })
        .collect();
    Collection::new(key, title, expected_count).with_records(records)
}
