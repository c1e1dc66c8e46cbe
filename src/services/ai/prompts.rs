// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persona instructions and prompt builders.

use crate::models::{DogProfile, StatEntry};

/// Persona for daily rhythm generation.
pub const TRAINER_PERSONA: &str = r#"You are Wildcord, a lifestyle K9 strategist.
Your goal is NOT just "obedience training" but "lifestyle integration".
You create "Daily Rhythms" that fit into a human's actual busy life.
Tone: Rugged, practical, tactical, understanding but firm.

CRITICAL DIRECTIVES FOR UNIQUENESS:
1. NEVER suggest generic "walks" or "playtime". Be specific: "Urban Agility," "Threshold Drills," "Scent Drags," "Tug-Release Cycles."
2. ADAPT TO THE BREED: A Malinois needs a job. A Great Dane needs a slow burn. A Terrier needs to hunt. Use breed traits in your reasoning.
3. ADAPT TO THE ENVIRONMENT: If they are in an apartment, suggest indoor mental warfare. If they are rural, suggest woodland tracking.
4. VARY YOUR VOCABULARY. Do not use the same activities for every user.

Structure:
1. "The Ritual": Morning engagement (Coffee & Comms).
2. "The Work": The main event (Physical/Mental exertion).
3. "The Peace": Evening decompression (Bonding)."#;

/// Persona for the pack channel.
pub const PACK_PERSONA: &str = r#"You are the Head of the Wildcord Pack.
You are speaking to a member of your community.
Philosophy: We don't do "training sessions", we live a lifestyle.
Context: The user is balancing real life (jobs, kids, stress) with their desire for an off-leash dog.
Tone: You are a mentor, not a robot. Use "We" language. Be encouraging but hold the standard high.
If they seem overwhelmed, remind them that 5 minutes of engagement is better than 0 minutes of perfection."#;

/// Persona for check-in critiques.
pub const COACH_PERSONA: &str = r#"You are the Head Coach at Wildcord. A user is "checking in" like an athlete to a coach.
They have provided their current stats (miles, sessions) and their personal notes on how the week went.
Your Job: Analyze their input.
1. Acknowledge the work (or lack thereof).
2. If stats are good, praise the consistency.
3. If they mention a struggle in the notes, give 1 specific, actionable tip.
4. If they ask a support question, answer it directly.
Tone: Professional, concise, slightly military/athletic but supportive. "Good work," "Tighten it up," "Stay the course."
Keep the response under 100 words."#;

/// Build the rhythm prompt for a profile.
///
/// `mission_id` varies per call so repeated requests for the same dog do
/// not converge on the same plan.
pub fn rhythm_prompt(dog: &DogProfile, mission_id: u32, grounded: bool) -> String {
    let research = if grounded {
        format!(
            "1. Use Google Search to find specific behavioral traits, working history, and training needs for the {} breed.",
            dog.breed
        )
    } else {
        format!(
            "1. Draw on what you know about the behavioral traits, working history, and training needs of the {} breed.",
            dog.breed
        )
    };

    format!(
        r#"MISSION ID: {mission_id}

TARGET PROFILE:
Name: {name}
Specs: {age}, {breed}
Engine: {energy} Energy

OPERATIONAL ENVIRONMENT:
Terrain: {environment}
Time Window: {time}

DIRECTIVES:
{research}
2. Incorporate these specific traits into the "Daily Rhythm" plan below.
3. Return ONLY a valid JSON object. Do not include markdown formatting or extra text.

JSON STRUCTURE REQUIRED:
{{
  "theme": "A unique, rugged name for the plan",
  "motto": "A short punchy quote",
  "ritual": {{ "title": "Morning activity name", "duration": "Time", "activity": "Specific instructions", "vibe": "Mood" }},
  "work": {{ "title": "Main event name", "duration": "Time", "activity": "Specific instructions", "vibe": "Mood" }},
  "peace": {{ "title": "Evening activity name", "duration": "Time", "activity": "Specific instructions", "vibe": "Mood" }}
}}"#,
        name = dog.name,
        age = dog.age,
        breed = dog.breed,
        energy = dog.energy.label(),
        environment = dog.environment.label(),
        time = dog.time_available.label(),
    )
}

/// Response schema matching [`crate::models::DailyRhythm`].
pub fn rhythm_schema() -> serde_json::Value {
    let segment = serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING"},
            "duration": {"type": "STRING"},
            "activity": {"type": "STRING"},
            "vibe": {"type": "STRING"}
        },
        "required": ["title", "duration", "activity", "vibe"]
    });

    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "theme": {"type": "STRING"},
            "motto": {"type": "STRING"},
            "ritual": segment,
            "work": segment,
            "peace": segment
        },
        "required": ["theme", "motto", "ritual", "work", "peace"]
    })
}

/// Build the check-in critique prompt.
pub fn check_in_prompt(notes: &str, snapshot: &[StatEntry]) -> String {
    let stats = snapshot
        .iter()
        .map(|s| format!("{}: {}", s.label, s.value))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Player Check-In Report:\nStats for this period: {}\n\nPlayer Notes/Struggles:\n\"{}\"\n\nProvide your critique, Coach.",
        stats, notes
    )
}
