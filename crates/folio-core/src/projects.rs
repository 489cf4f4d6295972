use crate::stores::Theme;
use crate::track::ItemAspect;

/// Static descriptor for one showcased project. Read-only; the interaction
/// core parametrizes the choreography from these and never mutates them.
#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub roles: &'static [&'static str],
    pub jargon: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub video: Option<&'static str>,
    pub gallery: &'static [&'static str],
    /// Theme the shutter swaps to when entering this project.
    pub theme: Theme,
}

impl Project {
    pub fn detail_path(&self) -> String {
        format!("/project/{}", self.slug)
    }

    /// Track items for the detail gallery: the video slot leads as the one
    /// landscape item, stills follow.
    pub fn track_aspects(&self) -> Vec<ItemAspect> {
        let mut aspects = Vec::with_capacity(1 + self.gallery.len());
        aspects.push(ItemAspect::Wide);
        aspects.extend(std::iter::repeat(ItemAspect::Standard).take(self.gallery.len()));
        aspects
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "01",
        title: "Ilkom-web",
        slug: "ilkom-web",
        category: "Dev / Design",
        year: "2025",
        roles: &["FRONTEND DEVELOPER", "UI/UX DESIGNER"],
        jargon: "/// ACADEMIC PORTAL REIMAGINED ///",
        description: "A comprehensive redesign of the Computer Science faculty website. \
                      The goal was to modernize the information architecture while \
                      introducing a distinct visual identity for the department.",
        thumbnail: "/img/ilkom-web.png",
        video: None,
        gallery: &["/img/ilkom-web.png", "/img/mymeet.jpg"],
        theme: Theme::Dark,
    },
    Project {
        id: "02",
        title: "MyMeet",
        slug: "mymeet",
        category: "Mobile App",
        year: "2025",
        roles: &["MOBILE ENGINEER", "PRODUCT DESIGNER"],
        jargon: "/// VIRTUAL CONNECTION ///",
        description: "A high-performance video conferencing application designed for \
                      low-bandwidth environments, with adaptive bitrate streaming and \
                      a custom signaling server.",
        thumbnail: "/img/mymeet.jpg",
        video: Some("/video/mymeet.mp4"),
        gallery: &["/img/mymeet.jpg", "/img/sim.jpg"],
        theme: Theme::Light,
    },
    Project {
        id: "03",
        title: "Schedule Integrated Manager",
        slug: "sim",
        category: "Web Dev",
        year: "2025",
        roles: &["FULL STACK DEVELOPER"],
        jargon: "/// SYSTEMATIC EFFICIENCY ///",
        description: "SIM fixes the chaos of university course planning with automated \
                      conflict detection and a drag-and-drop timetable.",
        thumbnail: "/img/sim.jpg",
        video: None,
        gallery: &["/img/sim.jpg", "/img/mytask.jpg"],
        theme: Theme::Dark,
    },
    Project {
        id: "04",
        title: "MyTask",
        slug: "mytask",
        category: "Web Daily",
        year: "2025",
        roles: &["FRONTEND DEVELOPER"],
        jargon: "/// DAILY DRIVER ///",
        description: "A daily task manager focused on speed: keyboard-first capture, \
                      offline storage, and zero-friction review.",
        thumbnail: "/img/mytask.jpg",
        video: None,
        gallery: &["/img/mytask.jpg", "/img/ilkom-web.png"],
        theme: Theme::Light,
    },
];

pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}
