//! Mentoring prompt builder.
//!
//! One structured prompt per eligible commit: persona framing, assignment
//! description (or fallback notice), the commit's diff text, a fixed
//! evaluation rubric, tone/format directives, and curated resource links.
//! The student-facing language is Georgian by design.

/// Fallback embedded when no assignment description file was found.
pub const MISSING_ASSIGNMENT_NOTICE: &str =
    "დავალების აღწერა არ მოიძებნა. შეაფასე ზოგადი HTML/CSS პრინციპებით.";

/// Curated learning resources offered to the student (at most one link per
/// review, per the format directive below).
pub const LEARNING_RESOURCES: &str = r#"
**HTML & Semantic Markup:**
- MDN HTML Basics: https://developer.mozilla.org/en-US/docs/Learn/HTML
- Web.dev Learn HTML: https://web.dev/learn/html

**CSS & Styling:**
- CSS-Tricks Complete Guide: https://css-tricks.com/guides/
- MDN CSS Layout: https://developer.mozilla.org/en-US/docs/Learn/CSS/CSS_layout
- Flexbox Froggy (Game): https://flexboxfroggy.com/
- Grid Garden (Game): https://cssgridgarden.com/

**JavaScript Basics:**
- JavaScript.info (ქართულად): https://javascript.info/
- MDN JavaScript Guide: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide
- Eloquent JavaScript (Free Book): https://eloquentjavascript.net/

**Forms & Validation:**
- MDN Forms Guide: https://developer.mozilla.org/en-US/docs/Learn/Forms
- Web.dev Sign-in Form Best Practices: https://web.dev/sign-in-form-best-practices/

**Accessibility:**
- Web.dev Learn Accessibility: https://web.dev/learn/accessibility
- A11y Project Checklist: https://www.a11yproject.com/checklist/

**General Best Practices:**
- Web.dev Learn: https://web.dev/learn
- Frontend Checklist: https://frontendchecklist.io/
"#;

const PERSONA: &str = r#"იმოქმედე როგორც დამწყები დეველოპერის მხარდამჭერი და მეგობრული მენტორი. 🇬🇪

**სტუდენტის კონტექსტი (სესია 11: Grid შესავალი):**
სტუდენტი არის აბსოლუტური დამწყები. მან იცის მხოლოდ:
- სემანტიკური HTML ტეგები (<header>, <main>, <section>).
- CSS-ის საბაზისო სინტაქსი და External CSS ფაილის შემოტანა.
- სელექტორები: Element, Class, ID.
- საბაზისო სტილები: ფერები, ფონტები, margin, padding.
- საბაზისო დონეზე იცის როგორ გამოიყენოს CSS Grid. და CSS Flexbox.
"#;

const RUBRIC: &str = r#"
**შეფასების კრიტერიუმები (Checklist):**
1. **HTML Semantics:** შეაქე, თუ იყენებს სემანტიკურ ტეგებს. თუ მხოლოდ <div>-ებს იყენებს, ურჩიე <section> ან <main>.
2. **CSS Method:** შეაქე External .css ფაილის გამოყენება. რბილად ურჩიე, რომ არ გამოიყენოს inline styles (`style="..."`) ან internal `<style>`.
3. **Selectors:** შეამოწმე, იყენებს თუ არა **კლასებს** (.class) სტილიზაციისთვის. თუ იყენებს **ID**-ს (#id) სტილისთვის, აუხსენი, რომ ID უნიკალური ელემენტებისთვისაა, სტილისთვის კი კლასები ჯობია.
4. **Unique IDs:** **მკაცრი წესი:** თუ ხედავ დუბლირებულ ID-ებს (ორ ელემენტს ერთი და იგივე ID აქვს), აუხსენი, რომ ID გვერდზე უნიკალური უნდა იყოს.
5. **Naming:** კლასის სახელები უნდა იყოს ინგლისურ ენაზე და შინაარსობრივი.
6. **Grid:** შეამოწმე, იყენებს თუ არა CSS Grid.
7. **Flexbox:** შეამოწმე, თუ იყენებს Flexbox, მიეცი რეკომენდაცია რომ გამოიყენოს CSS Grid Layout.
"#;

const TONE_AND_FORMAT: &str = r#"
**ტონი და სტილი:**
- იყავი რბილი და მეგობრული. გამოიყენე "სენდვიჩის მეთოდი" (შექება -> რჩევა -> გამხნევება).
- გამოიყენე ემოჯიები.
- ენა: **მკაცრად ქართული**.

**პასუხის ფორმატი:**
1. **მისალმება:** "გამარჯობა!" + კონკრეტული შექება კოდზე.
2. **Feedback:** 1-2 წინადადება. თუ კოდი კარგია, უბრალოდ შეაქე. თუ შეცდომაა (მაგ: ID სტილიზაციისთვის), აუხსენი მარტივად.
3. **რესურსი:** მხოლოდ იმ შემთხვევაში, თუ ტექნიკური შეცდომაა, მიეცი 1 ლინკი ქვემოთ მოცემული სიიდან.
4. **ზომა:** იყავი ლაკონური (მაქსიმუმ 500 სიმბოლო).
"#;

/// Builds the full mentoring prompt for one commit.
pub fn build_prompt(assignment: Option<&str>, changed_content: &str) -> String {
    let mut s = String::new();
    s.push_str(PERSONA);
    s.push_str("\n**დავალების აღწერა:**\n");
    s.push_str(assignment.unwrap_or(MISSING_ASSIGNMENT_NOTICE));
    s.push_str("\n\n**კოდში შესული ცვლილებები:**\n");
    s.push_str(changed_content);
    s.push_str(RUBRIC);
    s.push_str(TONE_AND_FORMAT);
    s.push_str("\n**ხელმისაწვდომი რესურსები:**\n");
    s.push_str(LEARNING_RESOURCES);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_assignment_text_when_present() {
        let p = build_prompt(Some("ააწყვე landing page"), "diff text");
        assert!(p.contains("ააწყვე landing page"));
        assert!(!p.contains(MISSING_ASSIGNMENT_NOTICE));
    }

    #[test]
    fn falls_back_when_assignment_missing() {
        let p = build_prompt(None, "diff text");
        assert!(p.contains(MISSING_ASSIGNMENT_NOTICE));
    }

    #[test]
    fn carries_diff_rubric_and_resources() {
        let p = build_prompt(None, "\n--- FILE: index.html ---\n");
        assert!(p.contains("--- FILE: index.html ---"));
        assert!(p.contains("**შეფასების კრიტერიუმები (Checklist):**"));
        assert!(p.contains("https://flexboxfroggy.com/"));
    }
}
