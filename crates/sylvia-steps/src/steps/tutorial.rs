//! Tutorial step: onboarding for new users.

use sylvia_session::SessionStore;

use crate::step::{RenderContext, Step, StepView};

const TUTORIAL_BODY: &str = "\
# 👋 Welcome to Sylvia

Your personal learning companion for setting goals, planning strategies, \
staying focused, and reflecting on your progress.

## 🚀 Quick Start

1. **Set your goal** - tell Sylvia what you're working on (homework, \
project, exam prep).
2. **Plan your strategy** - break your goal into smaller steps, estimate \
how long each might take, choose strategies.
3. **Work with the app beside you** - ask for hints, get feedback on your \
ideas, adjust your plan if you get stuck.
4. **Reflect and improve** - log what you completed, notice what worked, \
note what to do differently next time.

## 🧭 Main Areas

- **Goals & Plans** - create or update study goals and break big tasks \
into small, doable steps.
- **AI Assistant** - talk to the assistant like a study partner.
- **Reflection** - look back on what you did and build better habits over \
time.

## 💡 Tips

- Be specific with your goals: instead of \"study math\", try \"review 10 \
practice problems on quadratic equations\".
- Share your obstacles - if you're confused, bored, or distracted, say so.
- Use short work cycles (15–25 minutes), then check in and update your \
plan.
- Come back often: the more regularly you use Sylvia, the better it can \
support your learning patterns.

✨ Ready to start? Head to the **Goals** step to begin.";

pub struct TutorialStep;

impl Step for TutorialStep {
    fn id(&self) -> &'static str {
        "tutorial"
    }

    fn label(&self) -> &'static str {
        "Tutorial"
    }

    fn icon(&self) -> &'static str {
        "👋"
    }

    fn description(&self) -> &'static str {
        "Learn how to use Sylvia effectively."
    }

    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView {
        StepView::for_step(self, store, ctx).with_body(TUTORIAL_BODY)
    }
}
