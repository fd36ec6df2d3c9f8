//! Built-in vocabulary per locale.

use infinidisc_core::Locale;

/// Word lists for one locale.
#[derive(Debug)]
pub struct WordTable {
    pub adjectives: &'static [&'static str],
    pub nouns: &'static [&'static str],
    pub verbs: &'static [&'static str],
    pub adverbs: &'static [&'static str],
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub animals: &'static [&'static str],
}

impl WordTable {
    /// Returns the table for `locale`.
    pub fn for_locale(locale: Locale) -> &'static WordTable {
        match locale {
            Locale::EnUs => &EN_US,
            Locale::De => &DE,
            Locale::Uk => &UK,
        }
    }
}

static EN_US: WordTable = WordTable {
    adjectives: &[
        "quiet", "electric", "golden", "broken", "hollow", "velvet", "restless", "silver",
        "distant", "wild", "gentle", "neon", "frozen", "burning", "lonely", "crimson",
        "endless", "faded", "hidden", "bright",
    ],
    nouns: &[
        "harbor", "river", "signal", "garden", "mirror", "engine", "shadow", "ocean",
        "lantern", "highway", "window", "forest", "island", "thunder", "letter", "machine",
        "orchard", "canyon", "satellite", "echo",
    ],
    verbs: &[
        "wander", "dance", "fall", "burn", "drift", "run", "shine", "whisper", "breathe",
        "chase", "climb", "dream", "wait", "fly", "follow", "turn",
    ],
    adverbs: &[
        "slowly", "softly", "forever", "tonight", "quickly", "gently", "alone", "again",
        "loudly", "freely", "deeply", "quietly", "boldly", "sweetly",
    ],
    first_names: &[
        "Maya", "Ethan", "Olivia", "Marcus", "Ava", "Julian", "Sofia", "Caleb", "Harper",
        "Miles", "Nora", "Dante", "Iris", "Leo", "Grace", "Owen",
    ],
    last_names: &[
        "Carter", "Nguyen", "Brooks", "Ramirez", "Hayes", "Bennett", "Sullivan", "Park",
        "Foster", "Reyes", "Coleman", "Lindqvist", "Morgan", "Walsh", "Jensen", "Price",
    ],
    colors: &[
        "teal", "amber", "violet", "scarlet", "indigo", "ivory", "cyan", "magenta", "olive",
        "coral", "azure", "plum", "salmon", "turquoise",
    ],
    animals: &[
        "heron", "wolf", "fox", "owl", "tiger", "whale", "falcon", "panther", "raven",
        "otter", "lynx", "crow", "bison", "sparrow",
    ],
};

static DE: WordTable = WordTable {
    adjectives: &[
        "leise", "elektrisch", "golden", "zerbrochen", "hohl", "samtig", "rastlos", "silbern",
        "fern", "wild", "sanft", "grell", "gefroren", "brennend", "einsam", "dunkel", "endlos",
        "verblasst", "verborgen", "hell",
    ],
    nouns: &[
        "Hafen", "Fluss", "Signal", "Garten", "Spiegel", "Motor", "Schatten", "Ozean",
        "Laterne", "Autobahn", "Fenster", "Wald", "Insel", "Donner", "Brief", "Maschine",
        "Schlucht", "Echo", "Sommer", "Nebel",
    ],
    verbs: &[
        "wandern", "tanzen", "fallen", "brennen", "treiben", "laufen", "leuchten",
        "flüstern", "atmen", "jagen", "klettern", "träumen", "warten", "fliegen",
    ],
    adverbs: &[
        "langsam", "leise", "immer", "heute", "schnell", "sanft", "allein", "wieder", "laut",
        "frei", "tief", "kühn",
    ],
    first_names: &[
        "Lena", "Jonas", "Mia", "Lukas", "Hannah", "Felix", "Emma", "Paul", "Klara",
        "Maximilian", "Sophie", "Niklas", "Greta", "Tobias",
    ],
    last_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Wagner", "Becker", "Hoffmann",
        "Schulz", "Koch", "Richter", "Wolf", "Neumann", "Zimmermann",
    ],
    colors: &[
        "türkis", "bernstein", "violett", "scharlachrot", "indigo", "elfenbein", "cyan",
        "magenta", "oliv", "koralle", "azurblau", "pflaume",
    ],
    animals: &[
        "Reiher", "Wolf", "Fuchs", "Eule", "Tiger", "Wal", "Falke", "Panther", "Rabe",
        "Otter", "Luchs", "Krähe", "Bison", "Spatz",
    ],
};

static UK: WordTable = WordTable {
    adjectives: &[
        "тихий", "електричний", "золотий", "розбитий", "порожній", "оксамитовий", "неспокійний",
        "срібний", "далекий", "дикий", "ніжний", "неоновий", "морозний", "палаючий",
        "самотній", "багряний", "безкінечний", "прихований",
    ],
    nouns: &[
        "гавань", "річка", "сигнал", "сад", "дзеркало", "двигун", "тінь", "океан", "ліхтар",
        "шлях", "вікно", "ліс", "острів", "грім", "лист", "сон", "каньйон", "відлуння",
    ],
    verbs: &[
        "блукати", "танцювати", "падати", "горіти", "пливти", "бігти", "сяяти", "шепотіти",
        "дихати", "летіти", "мріяти", "чекати",
    ],
    adverbs: &[
        "повільно", "тихо", "назавжди", "сьогодні", "швидко", "ніжно", "наодинці", "знову",
        "голосно", "вільно", "глибоко",
    ],
    first_names: &[
        "Олена", "Андрій", "Марія", "Тарас", "Софія", "Дмитро", "Ірина", "Богдан", "Катерина",
        "Олег", "Наталія", "Максим",
    ],
    last_names: &[
        "Коваленко", "Шевченко", "Бондаренко", "Ткаченко", "Кравченко", "Мельник", "Олійник",
        "Лисенко", "Поліщук", "Бойко", "Савченко", "Руденко",
    ],
    colors: &[
        "бірюзовий", "бурштиновий", "фіолетовий", "червоний", "індиго", "кремовий", "блакитний",
        "пурпуровий", "оливковий", "кораловий", "лазуровий",
    ],
    animals: &[
        "чапля", "вовк", "лис", "сова", "тигр", "кит", "сокіл", "пантера", "ворон", "видра",
        "рись", "ворона", "бізон", "горобець",
    ],
};
