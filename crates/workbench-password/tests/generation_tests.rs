#[cfg(test)]
mod tests {
    // Contract coverage for the generation + scoring pipeline: the
    // class-coverage guarantee, policy failures, and the interaction
    // between generated passwords and the strength rubric.

    use workbench_password::{Error, Level, Policy, evaluate, generate, generate_batch};

    #[test]
    fn sixteen_char_all_classes_password_covers_every_class() {
        let policy = Policy::default();
        assert_eq!(policy.length, 16);

        let password = generate(&policy).unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()), "{password}");
        assert!(password.chars().any(|c| c.is_ascii_lowercase()), "{password}");
        assert!(password.chars().any(|c| c.is_ascii_digit()), "{password}");
        assert!(
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
            "{password}"
        );
    }

    #[test]
    fn all_classes_disabled_is_a_policy_error() {
        let policy = Policy {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
            ..Policy::default()
        };
        assert_eq!(generate(&policy), Err(Error::NoClassesEnabled));
    }

    #[test]
    fn generated_passwords_score_very_strong() {
        // 16 chars with every class enabled hits the rubric's cap
        let password = generate(&Policy::default()).unwrap();
        let report = evaluate(&password);
        assert_eq!(report.score, 7);
        assert_eq!(report.level, Level::VeryStrong);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn passwords_are_not_repeated_across_calls() {
        let batch = generate_batch(32, &Policy::default()).unwrap();
        for (i, a) in batch.iter().enumerate() {
            for b in &batch[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn rubric_examples_from_the_contract() {
        assert!(evaluate("aaaaaaaa").score < evaluate("aA1!aA1!").score);
    }
}
