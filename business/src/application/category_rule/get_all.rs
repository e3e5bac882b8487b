use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category_rule::errors::CategoryRuleError;
use crate::domain::category_rule::model::CategoryRule;
use crate::domain::category_rule::repository::CategoryRuleSource;
use crate::domain::category_rule::use_cases::get_all::GetCategoryRulesUseCase;
use crate::domain::logger::Logger;

pub struct GetCategoryRulesUseCaseImpl {
    pub source: Arc<dyn CategoryRuleSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryRulesUseCase for GetCategoryRulesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CategoryRule>, CategoryRuleError> {
        let rules = self.source.get_all().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch category rules: {}", e));
            CategoryRuleError::from(e)
        })?;

        if rules.is_empty() {
            self.logger.warn("No category rules configured");
            return Err(CategoryRuleError::NoneFound);
        }

        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category_rule::model::SubcategoryRule;
    use crate::domain::errors::SourceError;
    use mockall::mock;

    mock! {
        pub RuleSrc {}

        #[async_trait]
        impl CategoryRuleSource for RuleSrc {
            async fn get_all(&self) -> Result<Vec<CategoryRule>, SourceError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_rules_in_source_order() {
        let mut source = MockRuleSrc::new();
        source.expect_get_all().times(1).returning(|| {
            Ok(vec![
                CategoryRule {
                    base: "INFANTIL".to_string(),
                    subcategories: vec![SubcategoryRule {
                        name: "JUGUETES".to_string(),
                        prefix: "JUG".to_string(),
                    }],
                },
                CategoryRule {
                    base: "HOGAR".to_string(),
                    subcategories: vec![],
                },
            ])
        });

        let use_case = GetCategoryRulesUseCaseImpl {
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let rules = use_case.execute().await.unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].base, "INFANTIL");
        assert_eq!(rules[1].base, "HOGAR");
    }

    #[tokio::test]
    async fn should_fail_with_none_found_when_source_is_empty() {
        let mut source = MockRuleSrc::new();
        source.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetCategoryRulesUseCaseImpl {
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(CategoryRuleError::NoneFound)));
    }

    #[tokio::test]
    async fn should_map_source_failure() {
        let mut source = MockRuleSrc::new();
        source
            .expect_get_all()
            .returning(|| Err(SourceError::invalid_response()));

        let use_case = GetCategoryRulesUseCaseImpl {
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result,
            Err(CategoryRuleError::Source(SourceError::InvalidResponse))
        ));
    }
}
