use super::*;
use crate::catalog::{FALLBACK_REPLY, KeywordReply};

fn agent() -> DemoAgent {
    DemoAgent::new(Arc::new(Catalog::default()))
}

#[test]
fn every_prompt_gets_its_answer() {
    let agent = agent();
    for prompt in &agent.catalog().prompts {
        assert_eq!(agent.reply(&prompt.text), prompt.answer);
    }
}

#[test]
fn contact_support_answer() {
    assert_eq!(
        agent().reply("Contact support"),
        "You can contact support at support@wikamp.edu.pl."
    );
}

#[test]
fn prompt_match_is_exact_and_case_sensitive() {
    assert_eq!(agent().reply("contact support"), FALLBACK_REPLY);
    assert_eq!(agent().reply("Contact support "), FALLBACK_REPLY);
}

#[test]
fn keyword_match_is_case_insensitive_substring() {
    assert_eq!(
        agent().reply("I need PARKING info"),
        "Student parking is available behind Building C."
    );
    assert_eq!(
        agent().reply("When does the Canteen open?"),
        "The canteen is open from 8:00 AM to 4:00 PM."
    );
}

#[test]
fn recent_questions_hit_their_keywords() {
    let agent = agent();
    let replies: Vec<_> = agent
        .catalog()
        .recent_questions
        .iter()
        .map(|q| agent.reply(q).to_string())
        .collect();
    assert_eq!(
        replies,
        [
            "Scholarship requirements can be found in the 'Student Welfare' section.",
            "The canteen is open from 8:00 AM to 4:00 PM.",
            "Student parking is available behind Building C.",
        ]
    );
}

#[test]
fn scholarship_wins_over_later_keywords() {
    assert_eq!(
        agent().reply("scholarship and parking"),
        "Scholarship requirements can be found in the 'Student Welfare' section."
    );
    assert_eq!(
        agent().reply("parking near the canteen"),
        "The canteen is open from 8:00 AM to 4:00 PM."
    );
}

#[test]
fn unknown_question_gets_fallback() {
    assert_eq!(agent().reply("What is the meaning of life?"), FALLBACK_REPLY);
}

#[test]
fn substituted_catalog_drives_replies() {
    let catalog = Catalog {
        prompts: vec![],
        keyword_replies: vec![KeywordReply {
            keyword: "Wifi".to_string(),
            reply: "Use eduroam.".to_string(),
        }],
        fallback_reply: "No idea.".to_string(),
        ..Catalog::default()
    };
    let agent = DemoAgent::new(Arc::new(catalog));
    assert_eq!(agent.reply("how do I get on the WIFI"), "Use eduroam.");
    assert_eq!(agent.reply("Contact support"), "No idea.");
}
