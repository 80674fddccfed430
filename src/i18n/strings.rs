/// All localized user-facing strings for a language
///
/// Strings are stored as plain text with `**bold**` markdown markers, the same
/// way the coach content has always been written. Hosts that cannot render
/// markdown show the markers verbatim.
#[derive(Debug, Clone)]
pub struct ContentPack {
    // ==================== Onboarding ====================
    /// Opening message, shown before the language choice
    pub greeting: &'static str,

    /// Shown after a valid language choice, before the principles
    pub language_confirmed: &'static str,

    /// Shown when the language choice matches no known label
    pub language_invalid: &'static str,

    /// Principle lines, joined with newlines when explained.
    /// The last line doubles as the practice-again cue.
    pub principles: &'static [&'static str],

    // ==================== Practice Loop ====================
    /// Asks for the ATS-formatted version of the stored experience
    pub rewrite_prompt: &'static str,

    /// Shown when input fails the basic sanity check
    pub invalid_input: &'static str,

    /// Shown when a rewrite follows the formula
    pub feedback_good: &'static str,

    /// Shown when a rewrite misses part of the formula.
    /// Repeats the formula and gives a concrete example.
    pub feedback_needs_work: &'static str,

    /// Hint appended when the action verb is missing
    pub hint_action_verb: &'static str,

    /// Hint appended when the task description is too thin
    pub hint_task_description: &'static str,

    /// Hint appended when no quantification was found
    pub hint_quantification: &'static str,

    // ==================== Continue / Exit ====================
    /// Asks whether to keep practising after mastery
    pub continue_prompt: &'static str,

    /// Affirmative option label
    pub yes_label: &'static str,

    /// Negative option label
    pub no_label: &'static str,

    /// Shown when the continue decision is neither yes nor no
    pub decision_invalid: &'static str,

    /// Closing message on restart
    pub farewell: &'static str,
}

impl ContentPack {
    /// All principle lines joined into a single message.
    pub fn principles_text(&self) -> String {
        self.principles.join("\n")
    }

    /// The practice-again cue (last principle line).
    pub fn practice_cue(&self) -> &'static str {
        self.principles.last().copied().unwrap_or_default()
    }

    /// The two option labels offered at the continue decision.
    pub fn decision_options(&self) -> Vec<String> {
        vec![self.yes_label.to_string(), self.no_label.to_string()]
    }
}

// ==================== English Strings ====================

/// English content pack (canonical)
pub const ENGLISH_PACK: ContentPack = ContentPack {
    greeting: "Hello! I'm your ATS Resume Trainer. Let's get started! Which language would you prefer?",
    language_confirmed: "Great, we'll continue in English.",
    language_invalid: "Please select a valid language (English or Indonesian).",
    principles: &[
        "Let me explain the basic principles of writing ATS-friendly resumes:",
        "1. **Action Verb**: Start with a strong action verb (e.g., 'Managed', 'Developed', 'Implemented')",
        "2. **Task Description**: Clearly describe what you did",
        "3. **Quantification**: Add numbers to show impact (e.g., 'increased sales by 20%')",
        "The formula is: **Action Verb + Task Description + Quantification**",
        "Now, let's practice! Please write one line about your work experience (as you would normally write it):",
    ],

    rewrite_prompt: "Great! Now rewrite that experience following the ATS format (Action Verb + Task Description + Quantification):",
    invalid_input: "That doesn't look like a sentence I can work with. Please write at least a short sentence using letters, numbers and basic punctuation.",
    feedback_good: "Excellent! You've nailed the ATS format. Let's try another one to reinforce your learning.",
    feedback_needs_work: "Not quite there. Your response should include a strong action verb, a clear task description, and quantification (e.g., numbers or percentages). Here's a suggestion based on your input: try starting with an action like 'Managed' or 'Developed' and add a metric like 'by 20%'. Please try again.",
    hint_action_verb: "- Start with a strong action verb such as 'Managed', 'Developed' or 'Implemented'.",
    hint_task_description: "- Describe the task in more detail (more than five words).",
    hint_quantification: "- Add a number, a percentage or a metric to show impact.",

    continue_prompt: "Would you like to try another one?",
    yes_label: "Yes",
    no_label: "No",
    decision_invalid: "Please select Yes or No.",
    farewell: "You're doing great! With 2-3 more practice sessions, you'll master ATS-friendly resume writing. Goodbye and good luck with your job search!",
};

// ==================== Indonesian Strings ====================

/// Indonesian content pack
pub const INDONESIAN_PACK: ContentPack = ContentPack {
    greeting: "Halo! Saya ATS Resume Trainer Anda. Mari kita mulai! Bahasa apa yang Anda inginkan?",
    language_confirmed: "Baik, kita lanjutkan dalam Bahasa Indonesia.",
    language_invalid: "Silakan pilih bahasa yang valid (Inggris atau Indonesia).",
    principles: &[
        "Izinkan saya menjelaskan prinsip dasar menulis resume yang ramah ATS:",
        "1. **Kata Kerja Aksi**: Mulai dengan kata kerja aksi yang kuat (misalnya, 'Mengelola', 'Mengembangkan', 'Menerapkan')",
        "2. **Deskripsi Tugas**: Jelaskan dengan jelas apa yang Anda lakukan",
        "3. **Kuantifikasi**: Tambahkan angka untuk menunjukkan dampak (misalnya, 'meningkatkan penjualan sebesar 20%')",
        "Rumusnya adalah: **Kata Kerja Aksi + Deskripsi Tugas + Kuantifikasi**",
        "Sekarang, mari berlatih! Tolong tulis satu baris tentang pengalaman kerja Anda (seperti yang biasa Anda tulis):",
    ],

    rewrite_prompt: "Bagus! Sekarang tulis ulang pengalaman itu dengan mengikuti format ATS (Kata Kerja Aksi + Deskripsi Tugas + Kuantifikasi):",
    invalid_input: "Sepertinya itu bukan kalimat yang bisa saya proses. Tolong tulis setidaknya satu kalimat pendek dengan huruf, angka, dan tanda baca dasar.",
    feedback_good: "Luar biasa! Anda telah menguasai format ATS. Mari mencoba yang lain untuk memperkuat pembelajaran Anda.",
    feedback_needs_work: "Belum cukup. Respons Anda harus mencakup kata kerja aksi yang kuat, deskripsi tugas yang jelas, dan kuantifikasi (misalnya, angka atau persentase). Berikut saran berdasarkan input Anda: coba mulai dengan aksi seperti 'Mengelola' atau 'Mengembangkan' dan tambahkan metrik seperti 'sebesar 20%'. Silakan coba lagi.",
    hint_action_verb: "- Mulai dengan kata kerja aksi yang kuat seperti 'Mengelola', 'Mengembangkan' atau 'Menerapkan'.",
    hint_task_description: "- Jelaskan tugasnya lebih rinci (lebih dari lima kata).",
    hint_quantification: "- Tambahkan angka, persentase, atau metrik untuk menunjukkan dampak.",

    continue_prompt: "Apakah Anda ingin mencoba yang lain?",
    yes_label: "Ya",
    no_label: "Tidak",
    decision_invalid: "Silakan pilih Ya atau Tidak.",
    farewell: "Anda melakukannya dengan baik! Dengan 2-3 sesi latihan lagi, Anda akan menguasai penulisan resume yang ramah ATS. Selamat tinggal dan semoga sukses dengan pencarian kerja Anda!",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Principle Tests ====================

    #[test]
    fn test_principles_text_joins_all_lines() {
        let text = ENGLISH_PACK.principles_text();
        assert_eq!(text.lines().count(), ENGLISH_PACK.principles.len());
        assert!(text.starts_with("Let me explain"));
        assert!(text.contains("**Action Verb + Task Description + Quantification**"));
    }

    #[test]
    fn test_practice_cue_is_last_principle() {
        assert!(ENGLISH_PACK.practice_cue().starts_with("Now, let's practice!"));
        assert!(INDONESIAN_PACK.practice_cue().starts_with("Sekarang, mari berlatih!"));
    }

    #[test]
    fn test_packs_have_same_principle_count() {
        assert_eq!(ENGLISH_PACK.principles.len(), INDONESIAN_PACK.principles.len());
    }

    #[test]
    fn test_language_confirmed_has_no_call_to_action() {
        // Principles follow the confirmation without waiting for input
        assert_eq!(ENGLISH_PACK.language_confirmed, "Great, we'll continue in English.");
        assert_eq!(
            INDONESIAN_PACK.language_confirmed,
            "Baik, kita lanjutkan dalam Bahasa Indonesia."
        );
    }

    // ==================== Feedback Tests ====================

    #[test]
    fn test_needs_work_repeats_formula_with_example() {
        assert!(ENGLISH_PACK.feedback_needs_work.contains("action verb"));
        assert!(ENGLISH_PACK.feedback_needs_work.contains("by 20%"));
        assert!(INDONESIAN_PACK.feedback_needs_work.contains("sebesar 20%"));
    }

    #[test]
    fn test_hints_not_empty() {
        for pack in [&ENGLISH_PACK, &INDONESIAN_PACK] {
            assert!(!pack.hint_action_verb.is_empty());
            assert!(!pack.hint_task_description.is_empty());
            assert!(!pack.hint_quantification.is_empty());
        }
    }

    // ==================== Decision Tests ====================

    #[test]
    fn test_decision_options() {
        assert_eq!(ENGLISH_PACK.decision_options(), vec!["Yes", "No"]);
        assert_eq!(INDONESIAN_PACK.decision_options(), vec!["Ya", "Tidak"]);
    }
}
