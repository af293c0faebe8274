//! Prompt builders for the generation service
//!
//! Wording is a configuration detail; what matters is the response contract
//! each prompt establishes (comma-separated names, or strict JSON with the
//! documented keys).

use domain::{NutrientVector, ReferenceIntake};

/// Prompt for extracting coarse food-category names from free text.
///
/// The model must answer with a comma-separated list only, normalizing
/// compound names to their category (참치김밥 → 김밥), or an empty reply
/// when no food is mentioned.
pub fn food_extraction(message: &str) -> String {
    format!(
        "다음 문장에서 음식 이름만 추출해줘. 반드시 큰 분류 이름으로 추출하고 \
         (예: '참치김밥'은 '김밥'으로), 콤마(,)로 구분된 리스트만 반환해. \
         음식 이름 외의 단어는 절대 포함하지 마. 음식이 없으면 아무것도 반환하지 마.\n\
         문장: \"{message}\"\n\
         음식 리스트:"
    )
}

/// Prompt for batched per-food nutrition analysis.
///
/// The model must answer with a single JSON object whose
/// `nutrition_per_food` array carries one entry per requested food, each
/// with the seven-field nutrient vector.
pub fn nutrition_batch(foods: &[String]) -> String {
    format!(
        "아래 음식 리스트의 각 음식에 대해 영양사의 관점에서 단백질(g), \
         탄수화물(g), 수분(ml), 당류(g), 지방(g), 식이섬유(g), 나트륨(mg)을 \
         분석해줘. 다른 영양소는 언급하지 마.\n\
         반드시 JSON으로만 답하고 추가 설명은 붙이지 마. 키는 영문 소문자 \
         스네이크 케이스를 사용해.\n\n\
         음식 리스트: {}\n\n\
         JSON 형식 예시:\n\
         {{\n\
           \"nutrition_per_food\": [\n\
             {{\"food\": \"김밥\", \"nutrition\": {{\"protein\": 10.0, \
         \"carbohydrate\": 30.0, \"water\": 200.0, \"sugar\": 5.0, \
         \"fat\": 7.0, \"fiber\": 2.0, \"sodium\": 500.0}}}}\n\
           ]\n\
         }}",
        foods.join(", ")
    )
}

/// Prompt for judging deficiencies and proposing one next-meal dish.
///
/// The reference thresholds are fixed; the model must answer with a JSON
/// object holding `deficient_nutrients` and `next_meal_suggestion`. Salad
/// dishes and 뼈해장국 are excluded up front (and filtered again after
/// parsing, since models do not reliably honor exclusions).
pub fn meal_suggestion(total: &NutrientVector) -> String {
    format!(
        "아래 전체 영양소 합산을 일반 성인의 균형 식단 기준(단백질 {protein_ref}g, \
         탄수화물 {carb_ref}g, 수분 {water_ref}ml, 당류 {sugar_ref}g, 지방 {fat_ref}g, \
         식이섬유 {fiber_ref}g, 나트륨 {sodium_ref}mg)과 비교해서 부족한 영양소를 \
         판단하고, 부족분을 보충할 다음 끼니 요리를 딱 한 가지만 제안해줘. \
         식재료가 아닌 요리로 제안해(예: 두부 스테이크). 샐러드가 들어가는 요리는 \
         제외하고, '뼈해장국'은 항상 제외해.\n\
         반드시 JSON으로만 답하고 추가 설명은 붙이지 마. 키는 영문 소문자 \
         스네이크 케이스를 사용해.\n\n\
         전체 영양소 합산:\n\
         단백질: {protein}g\n탄수화물: {carbohydrate}g\n수분: {water}ml\n\
         당류: {sugar}g\n지방: {fat}g\n식이섬유: {fiber}g\n나트륨: {sodium}mg\n\n\
         JSON 형식 예시:\n\
         {{\"deficient_nutrients\": [\"탄수화물\", \"식이섬유\"], \
         \"next_meal_suggestion\": [\"곤약 비빔국수\"]}}",
        protein_ref = ReferenceIntake::PROTEIN_G,
        carb_ref = ReferenceIntake::CARBOHYDRATE_G,
        water_ref = ReferenceIntake::WATER_ML,
        sugar_ref = ReferenceIntake::SUGAR_G,
        fat_ref = ReferenceIntake::FAT_G,
        fiber_ref = ReferenceIntake::FIBER_G,
        sodium_ref = ReferenceIntake::SODIUM_MG,
        protein = total.protein,
        carbohydrate = total.carbohydrate,
        water = total.water,
        sugar = total.sugar,
        fat = total.fat,
        fiber = total.fiber,
        sodium = total.sodium,
    )
}

/// Prompt for meal-image analysis.
///
/// The model must answer with a JSON array of recognized foods, each with
/// estimated calories and the seven-field nutrient vector, one serving each.
pub fn meal_image_analysis() -> String {
    "이 식단 이미지를 분석해서 각 음식을 JSON 배열로만 반환해줘. 각 항목은 \
     {\"food_name\": \"음식 이름\", \"calories\": 숫자, \"nutrients\": \
     {\"protein\": 숫자, \"carbohydrate\": 숫자, \"water\": 숫자, \"sugar\": 숫자, \
     \"fat\": 숫자, \"fiber\": 숫자, \"sodium\": 숫자}} 형식이야. 1인분 기준으로 \
     추정하고, 단위는 g 또는 mg, 수분은 ml를 사용해. 다른 텍스트나 설명은 \
     절대 포함하지 마."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_prompt_embeds_message() {
        let prompt = food_extraction("오늘 김밥 먹었어");
        assert!(prompt.contains("오늘 김밥 먹었어"));
        assert!(prompt.contains("콤마"));
    }

    #[test]
    fn nutrition_prompt_lists_all_foods() {
        let foods = vec!["김밥".to_string(), "라면".to_string()];
        let prompt = nutrition_batch(&foods);
        assert!(prompt.contains("김밥, 라면"));
        assert!(prompt.contains("nutrition_per_food"));
    }

    #[test]
    fn suggestion_prompt_embeds_totals_and_thresholds() {
        let total = NutrientVector {
            protein: 18.0,
            ..NutrientVector::ZERO
        };
        let prompt = meal_suggestion(&total);
        assert!(prompt.contains("단백질: 18g"));
        assert!(prompt.contains("단백질 25g"));
        assert!(prompt.contains("나트륨 650mg"));
        assert!(prompt.contains("뼈해장국"));
        assert!(prompt.contains("deficient_nutrients"));
    }

    #[test]
    fn image_prompt_demands_array_shape() {
        let prompt = meal_image_analysis();
        assert!(prompt.contains("food_name"));
        assert!(prompt.contains("nutrients"));
    }
}
