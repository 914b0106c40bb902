/// A titled group of lines in the dashboard's Quick Guide panel
#[derive(Debug)]
pub struct GuideSection {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub static QUICK_GUIDE: [GuideSection; 4] = [
    GuideSection {
        title: "For Calming:",
        lines: &[
            "4-4-6 Calming (daily use)",
            "4-7-8 Sleep (bedtime)",
            "4-2-6-2 Anxiety (panic relief)",
        ],
    },
    GuideSection {
        title: "For Energy:",
        lines: &[
            "Power Breath (quick boost)",
            "Breath of Fire (morning)",
            "Quick Reset (between tasks)",
        ],
    },
    GuideSection {
        title: "For Balance:",
        lines: &["Box Breathing (focus)", "Coherent (meditation)"],
    },
    GuideSection {
        title: "Pro Tips:",
        lines: &[
            "Start with 5 cycles minimum",
            "Practice daily for best results",
            "Listen to your body's signals",
        ],
    },
];

pub const TITLE: &str = "Breath Lab";
pub const TAGLINE: &str = "Your nervous system control center";

pub const FOOTER: [&str; 3] = [
    "Made with verse-al love ♥ from The Novacene.",
    "\"Your breath is the smallest pattern that can rewrite your whole day.\"",
    "Shared under CC BY-NC-SA 4.0. If this helps, share it with a friend or learner who might need it.",
];

pub const CREDIT: [&str; 2] = ["The Novacene · Breath Lab", "CC BY-NC-SA 4.0"];
