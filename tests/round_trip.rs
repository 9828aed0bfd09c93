//! Training-to-inference round trip through the on-disk artifact.

use task_priority::artifact;
use task_priority::classifier::Classifier;
use task_priority::data;
use task_priority::forest::RandomForestBuilder;

#[test]
fn saved_and_reloaded_models_agree_on_every_training_row() {
    let builder = data::training_set();
    let dataset = builder.build();
    let model = RandomForestBuilder::default().fit(dataset.clone());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(artifact::MODEL_PATH);

    artifact::save(&model, &path).unwrap();
    let reloaded = artifact::load(&path).unwrap();

    for row in dataset.rows() {
        assert_eq!(model.predict(&row), reloaded.predict(&row));
    }
}

#[test]
fn reloaded_model_is_deterministic_per_input() {
    let builder = data::training_set();
    let model = RandomForestBuilder::default().fit(builder.build());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(artifact::MODEL_PATH);

    artifact::save(&model, &path).unwrap();
    let reloaded = artifact::load(&path).unwrap();

    for x in [[3.0, 2.0], [2.0, 4.0], [5.0, 1.0], [4.0, 4.0]] {
        assert_eq!(reloaded.predict(&x), reloaded.predict(&x));
    }
}

#[test]
fn dominant_training_rows_keep_their_label_after_reload() {
    let builder = data::training_set();
    let model = RandomForestBuilder::default().fit(builder.build());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(artifact::MODEL_PATH);

    artifact::save(&model, &path).unwrap();
    let reloaded = artifact::load(&path).unwrap();

    assert_eq!(reloaded.predict(&[3.0, 2.0]), 1.0);
    assert_eq!(reloaded.predict(&[5.0, 1.0]), 1.0);
}
