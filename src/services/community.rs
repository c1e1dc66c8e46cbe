// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community reference data: intel posts, events and the manifesto.
//!
//! Posts and events are read-only. The RSVP overlay on events is computed
//! per request and never written back.

use serde::Serialize;

use crate::models::{
    CommunityEvent, CommunityPost, Difficulty, EventView, ManifestoSection, PostType,
};

/// Posts and events as seen by one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityFeed {
    pub posts: Vec<CommunityPost>,
    pub events: Vec<EventView>,
}

/// Build the feed with the profile's RSVPs applied.
pub fn feed(joined: &[String]) -> CommunityFeed {
    let events = events()
        .into_iter()
        .map(|event| {
            let attending = joined.iter().any(|id| *id == event.id);
            EventView::new(event, attending)
        })
        .collect();

    CommunityFeed {
        posts: posts(),
        events,
    }
}

pub fn posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "1".to_string(),
            title: "Winter Protocol: Paw Protection".to_string(),
            content: "Temperatures are dropping. Salt on the roads is the enemy. If you aren't using wax or booties, you're failing your partner. We just dropped a guide on the best protective wax in the shop.".to_string(),
            date: "2 days ago".to_string(),
            author: "Wildcord HQ".to_string(),
            post_type: PostType::Intel,
        },
        CommunityPost {
            id: "2".to_string(),
            title: "The \"Leave It\" Challenge".to_string(),
            content: "This week, we are focusing on high-value denial. Can your dog hold a \"leave it\" with a raw steak 3 feet away? Post your videos in the Pack chat. Best execution earns a free harness.".to_string(),
            date: "5 days ago".to_string(),
            author: "Head Trainer".to_string(),
            post_type: PostType::Announcement,
        },
    ]
}

pub fn events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: "ev1".to_string(),
            title: "Sunrise Ruck: Black Ridge".to_string(),
            location: "North Trailhead, Parking Lot B".to_string(),
            date: "Saturday, Nov 18".to_string(),
            time: "06:00 AM".to_string(),
            description: "5 miles. 1500ft elevation. Reactive dogs must wear yellow ribbons. Coffee at the summit.".to_string(),
            difficulty: Difficulty::Ranger,
            attendees: 14,
        },
        CommunityEvent {
            id: "ev2".to_string(),
            title: "Urban Exposure: City Center".to_string(),
            location: "Union Station Plaza".to_string(),
            date: "Sunday, Nov 19".to_string(),
            time: "09:00 AM".to_string(),
            description: "Focus on neutrality in high traffic. Not a play date. We work on engagement amidst chaos.".to_string(),
            difficulty: Difficulty::Greenhorn,
            attendees: 22,
        },
    ]
}

/// Whether `event_id` names a known event.
pub fn is_known_event(event_id: &str) -> bool {
    events().iter().any(|e| e.id == event_id)
}

pub fn manifesto() -> Vec<ManifestoSection> {
    vec![
        section(
            "I",
            "The Moment Everything Changes",
            &[
                "Picture this: you unclip the leash.",
                "No fence. No tether. No hesitation.",
                "Your dog doesn’t bolt. He doesn’t vanish. He doesn’t even flinch.",
                "He turns his head, checks for you, and moves with you.",
                "That moment—no leash, no limits, just trust and dirt under both of your feet—is the line between owning a dog and having a partner.",
                "Off-leash isn’t a luxury. It’s freedom.",
                "Raw, hard-earned, grin-on-your-face freedom.",
                "And once you taste it, you’ll fight like hell to keep it.",
            ],
        ),
        section(
            "II",
            "Why Off-Leash is Everything",
            &[
                "You hike farther, faster, deeper. No six-foot tether holding you back from the ridgeline.",
                "Your dog burns energy the way nature intended—full sprint, nose to the ground, brain on fire.",
                "You stop yelling “come” every thirty seconds and start moving like a unit.",
                "Mental health? Through the roof. Real exercise. Real territory. Real purpose.",
                "And when the world throws chaos your way—loose deer, sketchy stranger, cliff edge—your dog listens the first time.",
                "Because the bond is iron.",
                "Because the training is non-negotiable.",
                "Without off-leash, you’re stuck in a parking-lot loop with a flexed leash and a frustrated dog.",
                "With it? You disappear into the mountains for the weekend and come back better humans.",
            ],
        ),
        section(
            "III",
            "None of This Happens Without Structure",
            &[
                "Let’s not sugarcoat it: off-leash isn’t “positive vibes only.”",
                "It’s forged in sweat, repetition, and boundaries that matter.",
                "A recall that works when a rabbit explodes out of the brush.",
                "A bombproof “leave it” when he finds something dead and delicious.",
                "A default “heel” when mountain bikers come screaming around the corner.",
                "This isn’t about breaking a dog’s spirit.",
                "It’s about giving him the keys to the kingdom.",
                "The better he listens, the more freedom he earns.",
                "The more freedom he earns, the bigger your life together gets.",
            ],
        ),
        section(
            "IV",
            "This is Wildcord",
            &[
                "We don’t hand out participation trophies.",
                "We build dogs—and people—who can handle real life off-leash, anywhere.",
                "Daily training plans that fit your actual schedule.",
                "Workouts that gas your dog the right way.",
                "Proofing sessions that turn “hope he comes back” into “he’s already beating me to the truck.”",
                "Gear that survives mud, river crossings, and roll-ins of questionable origin.",
                "We’re not here to make your dog tolerate your life.",
                "We’re here to make your life big enough for both of you.",
            ],
        ),
        section(
            "V",
            "If You’re Still Reading, You Already Know",
            &[
                "You’ve felt it—that pull.",
                "The one that says sidewalks and leashes aren’t enough.",
                "You want ridgelines at sunrise.",
                "You want your dog running point twenty yards ahead, ears up, glancing back just to make sure you’re keeping up.",
                "You want to unclip and know, without a shred of doubt, that he’s got your back and you’ve got his.",
                "That’s not a fantasy.",
                "That’s the standard.",
            ],
        ),
    ]
}

fn section(id: &str, title: &str, content: &[&str]) -> ManifestoSection {
    ManifestoSection {
        id: id.to_string(),
        title: title.to_string(),
        content: content.iter().map(|line| line.to_string()).collect(),
    }
}
