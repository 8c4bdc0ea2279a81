//! Static page content: profile, publications, service, and navigation.
//!
//! Everything here is authored data with `'static` lifetime. Components
//! render it directly; nothing mutates it at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::fmt;

/// Stable identifier of a publication entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicationId(pub u32);

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Short name shown as the navbar brand.
    pub brand: &'static str,
    pub title: &'static str,
    pub advisor: &'static str,
    pub advisor_url: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub research_interests: &'static str,
    pub github_url: &'static str,
    pub chinese_homepage_url: &'static str,
    pub avatar_src: &'static str,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublicationLinks {
    pub pdf: Option<&'static str>,
    pub code: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Publication {
    pub id: PublicationId,
    pub title: &'static str,
    /// Comma-separated author list as printed in the paper.
    pub authors: &'static str,
    pub venue: &'static str,
    pub year: u16,
    pub tags: &'static [&'static str],
    /// Abstract paragraphs. Empty when the entry has no abstract.
    pub abstract_paragraphs: &'static [&'static str],
    pub links: PublicationLinks,
}

impl Publication {
    /// Whether the card can be expanded to show an abstract.
    #[must_use]
    pub fn has_abstract(&self) -> bool {
        !self.abstract_paragraphs.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Le Chen | 陈乐",
    brand: "Le Chen",
    title: "Ph.D. Student at IPADS Lab, SJTU",
    advisor: "Prof. Yubin Xia",
    advisor_url: "https://ipads.se.sjtu.edu.cn/pub/members/yubin_xia/",
    email: "cen-le@sjtu.edu.cn",
    location: "Shanghai, China",
    bio: "I am a Ph.D. student in Computer Science and Technology at Shanghai Jiao Tong University. \
          I received my bachelor's degree in Software Engineering from SJTU.",
    research_interests: "My research interests lie in operating systems and LLM systems.",
    github_url: "https://github.com/lec77",
    chinese_homepage_url: "https://ipads.se.sjtu.edu.cn/zh/pub/members/le_chen/",
    avatar_src: "/assets/avatar.jpg",
};

/// Author name emphasised in every author list.
pub const HIGHLIGHT_NAME: &str = "Le Chen";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Publications", href: "#publications" },
    NavLink { label: "Service", href: "#service" },
];

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        id: PublicationId(1),
        title: "Characterizing Mobile SoC for Accelerating Heterogeneous LLM Inference",
        authors: "Le Chen*, Dahu Feng*, Erhu Feng, Yingrui Wang, Rong Zhao, Yubin Xia, Pinjie Xu, Haibo Chen",
        venue: "SOSP 2025",
        year: 2025,
        tags: &["LLM Inference", "Heterogeneous SoC"],
        abstract_paragraphs: &[
            "With the rapid advancement of AI technologies, contemporary mobile systems have begun \
             integrating LLM capabilities on-device to enhance privacy and reduce response latency. \
             Current mobile SoCs ship with diverse AI accelerators, yet there has not been a \
             comprehensive characterization of these heterogeneous processors, and existing designs \
             typically leverage only a single accelerator.",
            "We summarize the key performance characteristics of heterogeneous processors and SoC \
             memory bandwidth, and propose heterogeneous parallel mechanisms to fully exploit both GPU \
             and NPU resources. We further design a fast synchronization mechanism between \
             heterogeneous processors that leverages a unified memory architecture. HeteroInfer \
             delivers a 1.34x-6.02x end-to-end speedup over state-of-the-art GPU-only and NPU-only \
             LLM engines while maintaining negligible interference with other applications.",
        ],
        links: PublicationLinks { pdf: Some("https://dl.acm.org/doi/10.1145/3731569.3764808"), code: None },
    },
    Publication {
        id: PublicationId(2),
        title: "μEFI: A Microkernel-Style UEFI with Isolation and Transparency",
        authors: "Le Chen, Yiyang Wu, Jinyu Gu, Yubin Xia, Haibo Chen",
        venue: "ATC 2025",
        year: 2025,
        tags: &["Operating System", "Firmware Security"],
        abstract_paragraphs: &[
            "UEFI Secure Boot aims to ensure that only trusted drivers and applications are loaded \
             during startup, yet the growing number of UEFI-related CVEs and emerging bypass attacks \
             expose critical limitations.",
            "μEFI transparently runs UEFI modules in sandboxes by deprivileging them to user mode and \
             isolating them across address spaces. We introduce trampoline injection, protocol \
             analysis, a seccomp-like capability system, and automated input validation. μEFI runs \
             complex UEFI modules without modifications and incurs only 1.91% overhead during the \
             boot phase.",
        ],
        links: PublicationLinks {
            pdf: Some("https://www.usenix.org/conference/atc25/presentation/chen-le"),
            code: None,
        },
    },
    Publication {
        id: PublicationId(3),
        title: "Encrypted Databases Made Secure Yet Maintainable",
        authors: "Mingyu Li, Xuyang Zhao, Le Chen, Cheng Tan, Huorong Li, Sheng Wang, Zeyu Mi, Yubin Xia, \
                  Feifei Li, Haibo Chen",
        venue: "OSDI 2023",
        year: 2023,
        tags: &["Database", "Security"],
        abstract_paragraphs: &[],
        links: PublicationLinks {
            pdf: Some("https://www.usenix.org/conference/osdi23/presentation/li-mingyu"),
            code: None,
        },
    },
];

pub const SERVICE_TEACHING: &[&str] = &[
    "Teaching Assistant, AI Computing Systems, Fall 2025",
    "Teaching Assistant, Operating System (SE3357), Spring 2024",
    "Teaching Assistant, Computer System Engineering (SJTU SE3331), Fall 2023",
];

pub const COPYRIGHT_YEAR: u16 = 2025;

/// Look up a publication by id.
#[must_use]
pub fn publication(id: PublicationId) -> Option<&'static Publication> {
    PUBLICATIONS.iter().find(|publication| publication.id == id)
}
