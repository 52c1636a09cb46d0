/// One outbound link row: what it says, where it goes, and the 1-2 character
/// token shown in the square icon slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

/// The outbound links, in display order. Row indices used for hover tracking
/// and reveal delays are positions in this array.
pub static LINKS: [LinkEntry; 5] = [
    LinkEntry {
        name: "Twitter / X",
        url: "#",
        icon: "X",
    },
    LinkEntry {
        name: "GitHub",
        url: "#",
        icon: "GH",
    },
    LinkEntry {
        name: "LinkedIn",
        url: "#",
        icon: "in",
    },
    LinkEntry {
        name: "Portfolio",
        url: "#",
        icon: "PF",
    },
    LinkEntry {
        name: "Email Me",
        url: "#",
        icon: "@",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatEntry {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [StatEntry; 3] = [
    StatEntry {
        value: "5+",
        label: "Years",
    },
    StatEntry {
        value: "50+",
        label: "Projects",
    },
    StatEntry {
        value: "∞",
        label: "Ideas",
    },
];
