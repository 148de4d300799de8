//! Registration flow definitions
//!
//! Each flow is a fixed list of fields asked one message at a time; feeding
//! answers in through [`advance`] walks a session to completion, ending in
//! the record that gets appended to the ledger.

use crate::models::{Category, FlowKind, RegistrationRecord, Reply};
use crate::texts;
use crate::utils::errors::{Result, TawzeeError};

use super::context::Session;

/// How input for a field is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Any non-empty text after trimming
    Name,
    /// One of the four category labels, byte-exact
    Category,
}

/// Keyboard sent along with a field's prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKeyboard {
    /// Clear the menu keyboard left over from the flow selection
    Clear,
    /// Show the category buttons
    Categories,
    /// Plain prompt, keyboard untouched
    Plain,
}

/// One question within a flow
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub prompt: &'static str,
    pub rule: FieldRule,
    pub keyboard: PromptKeyboard,
}

/// An ordered list of questions ending in a persisted record
#[derive(Debug, Clone, Copy)]
pub struct FlowSpec {
    pub kind: FlowKind,
    pub fields: &'static [FieldSpec],
}

const CHAIR_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "registrant",
        prompt: texts::ASK_REGISTRANT_NAME,
        rule: FieldRule::Name,
        keyboard: PromptKeyboard::Clear,
    },
    FieldSpec {
        name: "category",
        prompt: texts::ASK_CATEGORY,
        rule: FieldRule::Category,
        keyboard: PromptKeyboard::Categories,
    },
    FieldSpec {
        name: "partner1",
        prompt: texts::ASK_CHAIR_PARTNER,
        rule: FieldRule::Name,
        keyboard: PromptKeyboard::Plain,
    },
];

const LOCKER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "registrant",
        prompt: texts::ASK_REGISTRANT_NAME,
        rule: FieldRule::Name,
        keyboard: PromptKeyboard::Clear,
    },
    FieldSpec {
        name: "category",
        prompt: texts::ASK_CATEGORY,
        rule: FieldRule::Category,
        keyboard: PromptKeyboard::Categories,
    },
    FieldSpec {
        name: "partner1",
        prompt: texts::ASK_LOCKER_PARTNER1,
        rule: FieldRule::Name,
        keyboard: PromptKeyboard::Plain,
    },
    FieldSpec {
        name: "partner2",
        prompt: texts::ASK_LOCKER_PARTNER2,
        rule: FieldRule::Name,
        keyboard: PromptKeyboard::Plain,
    },
];

pub static CHAIR_FLOW: FlowSpec = FlowSpec {
    kind: FlowKind::Chair,
    fields: CHAIR_FIELDS,
};

pub static LOCKER_FLOW: FlowSpec = FlowSpec {
    kind: FlowKind::Locker,
    fields: LOCKER_FIELDS,
};

/// Static definition of a flow
pub fn flow_spec(kind: FlowKind) -> &'static FlowSpec {
    match kind {
        FlowKind::Chair => &CHAIR_FLOW,
        FlowKind::Locker => &LOCKER_FLOW,
    }
}

/// Outcome of feeding one message into a session
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Input accepted; here is the next question
    Next(Reply),
    /// Input rejected; same question again
    Retry(Reply),
    /// Flow finished; the assembled record is ready for the ledger
    Complete(RegistrationRecord),
}

/// Start a session for a flow, returning it with the first prompt
pub fn start(identity: i64, kind: FlowKind) -> (Session, Reply) {
    let spec = flow_spec(kind);
    let session = Session::new(identity, kind);
    (session, prompt_for(&spec.fields[0]))
}

/// Feed one message into a session
///
/// A validation miss self-loops with a re-prompt and leaves the session
/// untouched; accepting the last field assembles the finished record
/// instead of another prompt.
pub fn advance(session: &mut Session, input: &str) -> Result<Advance> {
    let spec = flow_spec(session.flow);
    let field = spec
        .fields
        .get(session.step)
        .ok_or_else(|| TawzeeError::InvalidStateTransition {
            from: format!("{}:{}", session.flow.as_str(), session.step),
            to: "next field".to_string(),
        })?;

    let answer = input.trim();
    match field.rule {
        FieldRule::Name if answer.is_empty() => {
            return Ok(Advance::Retry(Reply::plain(texts::EMPTY_NAME)));
        }
        FieldRule::Category if Category::parse(answer).is_none() => {
            return Ok(Advance::Retry(Reply::plain(texts::INVALID_CATEGORY)));
        }
        _ => {}
    }

    session.insert_field(field.name, answer.to_string());
    session.advance_step();

    match spec.fields.get(session.step) {
        Some(next) => Ok(Advance::Next(prompt_for(next))),
        None => Ok(Advance::Complete(assemble(session)?)),
    }
}

fn prompt_for(field: &FieldSpec) -> Reply {
    match field.keyboard {
        PromptKeyboard::Clear => Reply::without_keyboard(field.prompt),
        PromptKeyboard::Categories => Reply::with_choices(field.prompt, texts::category_keyboard()),
        PromptKeyboard::Plain => Reply::plain(field.prompt),
    }
}

/// Build the ledger record from a finished session
fn assemble(session: &Session) -> Result<RegistrationRecord> {
    let field = |name: &str| -> Result<String> {
        session
            .field(name)
            .map(str::to_string)
            .ok_or_else(|| TawzeeError::InvalidInput(format!("Missing collected field: {}", name)))
    };

    let category = Category::parse(&field("category")?).ok_or_else(|| {
        TawzeeError::InvalidInput("Collected category is not a known label".to_string())
    })?;

    Ok(match session.flow {
        FlowKind::Chair => {
            RegistrationRecord::chair(field("registrant")?, category, field("partner1")?)
        }
        FlowKind::Locker => RegistrationRecord::locker(
            field("registrant")?,
            category,
            field("partner1")?,
            field("partner2")?,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Keyboard;
    use assert_matches::assert_matches;

    #[test]
    fn test_chair_flow_completes_with_three_answers() {
        let (mut session, first) = start(7, FlowKind::Chair);
        assert_eq!(first.text, texts::ASK_REGISTRANT_NAME);
        assert_eq!(first.keyboard, Keyboard::Remove);

        assert_matches!(advance(&mut session, "Ali").unwrap(), Advance::Next(_));
        assert_matches!(advance(&mut session, "الأولى").unwrap(), Advance::Next(_));

        let record = assert_matches!(
            advance(&mut session, "Sara").unwrap(),
            Advance::Complete(record) => record
        );
        assert_eq!(record.kind, FlowKind::Chair);
        assert_eq!(record.registrant, "Ali");
        assert_eq!(record.category, Category::First);
        assert_eq!(record.partner1, "Sara");
        assert_eq!(record.partner2, "");
    }

    #[test]
    fn test_locker_flow_asks_for_two_partners() {
        let (mut session, _) = start(7, FlowKind::Locker);

        let reply = assert_matches!(
            advance(&mut session, "Omar").unwrap(),
            Advance::Next(reply) => reply
        );
        assert_eq!(reply.text, texts::ASK_CATEGORY);

        let reply = assert_matches!(
            advance(&mut session, "الثالثة").unwrap(),
            Advance::Next(reply) => reply
        );
        assert_eq!(reply.text, texts::ASK_LOCKER_PARTNER1);

        let reply = assert_matches!(
            advance(&mut session, "Hana").unwrap(),
            Advance::Next(reply) => reply
        );
        assert_eq!(reply.text, texts::ASK_LOCKER_PARTNER2);

        let record = assert_matches!(
            advance(&mut session, "Lina").unwrap(),
            Advance::Complete(record) => record
        );
        assert_eq!(record.kind, FlowKind::Locker);
        assert_eq!(record.registrant, "Omar");
        assert_eq!(record.category, Category::Third);
        assert_eq!(record.partner1, "Hana");
        assert_eq!(record.partner2, "Lina");
    }

    #[test]
    fn test_invalid_category_leaves_session_unchanged() {
        let (mut session, _) = start(7, FlowKind::Chair);
        advance(&mut session, "Ali").unwrap();

        let reply = assert_matches!(
            advance(&mut session, "غير صحيح").unwrap(),
            Advance::Retry(reply) => reply
        );
        assert_eq!(reply.text, texts::INVALID_CATEGORY);
        assert_eq!(reply.keyboard, Keyboard::Keep);
        assert_eq!(session.step, 1);
        assert_eq!(session.fields.len(), 1);

        assert_matches!(advance(&mut session, "الأولى").unwrap(), Advance::Next(_));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let (mut session, _) = start(7, FlowKind::Chair);

        let reply = assert_matches!(
            advance(&mut session, "   ").unwrap(),
            Advance::Retry(reply) => reply
        );
        assert_eq!(reply.text, texts::EMPTY_NAME);
        assert_eq!(session.step, 0);
        assert!(session.fields.is_empty());

        assert_matches!(advance(&mut session, "Ali").unwrap(), Advance::Next(_));
    }

    #[test]
    fn test_answers_are_trimmed() {
        let (mut session, _) = start(7, FlowKind::Chair);
        advance(&mut session, "  Ali  ").unwrap();
        assert_eq!(session.field("registrant"), Some("Ali"));
    }

    #[test]
    fn test_category_prompt_shows_the_four_buttons() {
        let (mut session, _) = start(7, FlowKind::Chair);

        let reply = assert_matches!(
            advance(&mut session, "Ali").unwrap(),
            Advance::Next(reply) => reply
        );
        assert_eq!(reply.keyboard, Keyboard::Show(texts::category_keyboard()));
    }

    #[test]
    fn test_stepping_past_the_end_is_an_error() {
        let (mut session, _) = start(7, FlowKind::Chair);
        session.step = 99;

        let err = advance(&mut session, "Ali").unwrap_err();
        assert_matches!(err, TawzeeError::InvalidStateTransition { .. });
    }
}
