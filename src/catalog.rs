//! Static exam catalog and the pure filtering logic over it.

use crate::types::{Exam, ExamType, FilterState, GradeLevel, Subject};
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub static CATALOG: Lazy<Vec<Exam>> = Lazy::new(seed_exams);

fn exam(
    id: &str,
    title: &str,
    subject: Subject,
    grade: GradeLevel,
    year: i32,
    exam_type: ExamType,
    description: &str,
) -> Exam {
    Exam {
        id: id.to_string(),
        title: title.to_string(),
        subject,
        grade,
        year,
        exam_type,
        description: Some(description.to_string()),
        download_url: None,
    }
}

fn seed_exams() -> Vec<Exam> {
    vec![
        exam(
            "1",
            "Exame Nacional de Matemática 12ª Classe - 1ª Fase",
            Subject::Matematica,
            GradeLevel::DecimaSegunda,
            2023,
            ExamType::ExameNacional,
            "Prova oficial da 1ª fase do exame nacional de acesso ao ensino superior.",
        ),
        exam(
            "2",
            "Exame Nacional de Português 12ª Classe - 2ª Fase",
            Subject::LinguaPortuguesa,
            GradeLevel::DecimaSegunda,
            2023,
            ExamType::ExameNacional,
            "Prova de recurso focada em interpretação de texto e gramática avançada.",
        ),
        exam(
            "3",
            "Prova Trimestral de Física",
            Subject::Fisica,
            GradeLevel::Decima,
            2024,
            ExamType::ProvaFrequencia,
            "Avaliação do 2º trimestre cobrindo mecânica clássica e cinemática.",
        ),
        exam(
            "4",
            "Exame de Biologia e Geologia",
            Subject::Biologia,
            GradeLevel::DecimaPrimeira,
            2022,
            ExamType::ExameNacional,
            "Foco em genética e biologia celular.",
        ),
        exam(
            "5",
            "Teste de História de São Tomé e Príncipe",
            Subject::Historia,
            GradeLevel::Nona,
            2023,
            ExamType::ProvaFrequencia,
            "História colonial e processo de independência.",
        ),
        exam(
            "6",
            "Exame de Matemática 9ª Classe",
            Subject::Matematica,
            GradeLevel::Nona,
            2022,
            ExamType::ExameNacional,
            "Exame final de ciclo básico. Álgebra e Geometria plana.",
        ),
        exam(
            "7",
            "Prova de Química Orgânica",
            Subject::Quimica,
            GradeLevel::DecimaSegunda,
            2021,
            ExamType::ProvaFrequencia,
            "Reações de compostos de carbono e nomenclatura.",
        ),
        exam(
            "8",
            "Exame Nacional de Geografia",
            Subject::Geografia,
            GradeLevel::DecimaSegunda,
            2023,
            ExamType::ExameNacional,
            "Geografia económica e demografia de STP.",
        ),
    ]
}

/// Applies every filter axis to the catalog. A `None` selector always
/// matches; the free-text query matches title or description
/// case-insensitively as a substring. Input order is preserved.
pub fn filter_exams(
    exams: &[Exam],
    filter: &FilterState,
    favorites: &HashSet<String>,
) -> Vec<Exam> {
    let query = filter.query.trim().to_lowercase();
    exams
        .iter()
        .filter(|exam| {
            let matches_subject = filter.subject.is_none_or(|s| s == exam.subject);
            let matches_grade = filter.grade.is_none_or(|g| g == exam.grade);
            let matches_year = filter.year.is_none_or(|y| y == exam.year);
            let matches_query = query.is_empty()
                || exam.title.to_lowercase().contains(&query)
                || exam
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query));
            let matches_favorite = !filter.only_favorites || favorites.contains(&exam.id);
            matches_subject && matches_grade && matches_year && matches_query && matches_favorite
        })
        .cloned()
        .collect()
}

/// Distinct years present in the catalog, newest first. Drives the year
/// `<select>` in the browse sidebar.
pub fn year_options(exams: &[Exam]) -> Vec<i32> {
    let mut years: Vec<i32> = exams.iter().map(|exam| exam.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_favorites() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn all_sentinels_return_full_catalog() {
        let filtered = filter_exams(&CATALOG, &FilterState::default(), &no_favorites());
        assert_eq!(filtered.len(), CATALOG.len());
        assert_eq!(filtered, *CATALOG);
    }

    #[test]
    fn filtered_result_is_subset_of_catalog() {
        let filter = FilterState {
            subject: Some(Subject::Matematica),
            grade: None,
            year: Some(2023),
            query: "exame".to_string(),
            only_favorites: false,
        };
        let filtered = filter_exams(&CATALOG, &filter, &no_favorites());
        for exam in &filtered {
            assert!(CATALOG.contains(exam));
            assert_eq!(exam.subject, Subject::Matematica);
            assert_eq!(exam.year, 2023);
        }
    }

    #[test]
    fn query_matches_title_and_description_case_insensitively() {
        let filter = FilterState {
            query: "GENÉTICA".to_string(),
            ..Default::default()
        };
        let filtered = filter_exams(&CATALOG, &filter, &no_favorites());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "4");

        let filter = FilterState {
            query: "química".to_string(),
            ..Default::default()
        };
        let filtered = filter_exams(&CATALOG, &filter, &no_favorites());
        assert!(filtered.iter().any(|exam| exam.id == "7"));
    }

    #[test]
    fn favorites_only_intersects_with_favorite_set() {
        let favorites: HashSet<String> = ["3".to_string(), "5".to_string()].into();
        let filter = FilterState {
            only_favorites: true,
            ..Default::default()
        };
        let filtered = filter_exams(&CATALOG, &filter, &favorites);
        let ids: Vec<&str> = filtered.iter().map(|exam| exam.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "5"]);
    }

    #[test]
    fn empty_favorites_with_favorites_filter_yields_nothing() {
        let filter = FilterState {
            only_favorites: true,
            ..Default::default()
        };
        assert!(filter_exams(&CATALOG, &filter, &no_favorites()).is_empty());
    }

    #[test]
    fn year_options_are_distinct_and_descending() {
        assert_eq!(year_options(&CATALOG), vec![2024, 2023, 2022, 2021]);
    }
}
