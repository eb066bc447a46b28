use serde_json::json;

use crate::generator::{
  ast::DefinitionsDocument,
  errors::GeneratorError,
  orchestrator::{GeneratedFile, Orchestrator},
};

fn document(value: serde_json::Value) -> DefinitionsDocument {
  serde_json::from_value(value).unwrap()
}

fn sample_document() -> DefinitionsDocument {
  document(json!({
    "definitions": [
      {
        "alias": {
          "name": "Time",
          "package": "io.k8s.apimachinery.pkg.apis.meta.v1",
          "type": { "primitive": "string" }
        }
      },
      {
        "object": {
          "name": "ObjectMeta",
          "package": "io.k8s.apimachinery.pkg.apis.meta.v1",
          "properties": {
            "name": { "type": { "primitive": "string" } },
            "creationTimestamp": {
              "type": { "ref": { "package": "io.k8s.apimachinery.pkg.apis.meta.v1", "name": "Time" } }
            }
          }
        }
      },
      {
        "object": {
          "name": "ConfigMap",
          "package": "io.k8s.api.core.v1",
          "properties": {
            "apiVersion": { "type": { "primitive": "string" }, "required": true },
            "data": { "type": { "map": { "values": { "primitive": "string" } } } },
            "kind": { "type": { "primitive": "string" }, "required": true },
            "metadata": {
              "type": { "ref": { "package": "io.k8s.apimachinery.pkg.apis.meta.v1", "name": "ObjectMeta" } },
              "required": true
            }
          },
          "groupVersionKinds": [{ "group": "", "version": "v1", "kind": "ConfigMap" }],
          "isKubernetesObject": true
        }
      }
    ]
  }))
}

#[test]
fn test_one_file_per_package_sorted_by_name() {
  let output = Orchestrator::new(sample_document()).unwrap().generate();
  let names: Vec<&str> = output.files.iter().map(|file| file.name.as_str()).collect();

  assert_eq!(
    names,
    vec!["io.k8s.api.core.v1.ts", "io.k8s.apimachinery.pkg.apis.meta.v1.ts"]
  );
}

#[test]
fn test_definitions_within_a_file_are_sorted() {
  let output = Orchestrator::new(sample_document()).unwrap().generate();
  let meta = &output.files[1];

  assert_eq!(
    meta.code,
    "export class ObjectMeta {\n  public name?: string;\n\n  public creationTimestamp?: Time;\n}\n\nexport type Time = string;\n"
  );
}

#[test]
fn test_kubernetes_object_file() {
  let output = Orchestrator::new(sample_document()).unwrap().generate();
  let GeneratedFile { name, code } = &output.files[0];

  assert_eq!(name, "io.k8s.api.core.v1.ts");
  let expected = r#"import { KubernetesObject } from '@googlecontainertools/kpt-functions';
import * as apisMetaV1 from './io.k8s.apimachinery.pkg.apis.meta.v1';

export class ConfigMap implements KubernetesObject {
  public apiVersion: string;

  public data?: {[key: string]: string};

  public kind: string;

  public metadata: apisMetaV1.ObjectMeta;

  constructor(desc: ConfigMap.Interface) {
    this.apiVersion = ConfigMap.apiVersion;
    this.data = desc.data;
    this.kind = ConfigMap.kind;
    this.metadata = desc.metadata;
  }
}

export function isConfigMap(o: any): o is ConfigMap {
  return o && o.apiVersion === ConfigMap.apiVersion && o.kind === ConfigMap.kind;
}

export namespace ConfigMap {
  export const apiVersion = "v1";
  export const group = "";
  export const version = "v1";
  export const kind = "ConfigMap";

  // named constructs a ConfigMap with metadata.name set to name.
  export function named(name: string): ConfigMap {
    return new ConfigMap({metadata: {name}});
  }
  export interface Interface {
    data?: {[key: string]: string};

    metadata: apisMetaV1.ObjectMeta;
  }
}
"#;
  assert_eq!(code, expected);
}

#[test]
fn test_stats_are_recorded() {
  let output = Orchestrator::new(sample_document()).unwrap().generate();

  assert_eq!(output.stats.files_generated, 2);
  assert_eq!(output.stats.definitions_rendered, 3);
  assert_eq!(output.stats.objects_generated, 2);
  assert_eq!(output.stats.type_aliases_generated, 1);
  assert_eq!(output.stats.kubernetes_objects_generated, 1);
  assert_eq!(output.stats.imports_generated, 1);
}

#[test]
fn test_registry_holds_top_level_objects_only() {
  let orchestrator = Orchestrator::new(sample_document()).unwrap();
  assert_eq!(orchestrator.definitions().len(), 3);
  assert_eq!(orchestrator.registry().len(), 2);
}

#[test]
fn test_generation_is_deterministic() {
  let orchestrator = Orchestrator::new(sample_document()).unwrap();
  assert_eq!(orchestrator.generate().files, orchestrator.generate().files);
}

#[test]
fn test_empty_document_generates_nothing() {
  let output = Orchestrator::new(DefinitionsDocument::default()).unwrap().generate();
  assert!(output.files.is_empty());
  assert_eq!(output.stats.files_generated, 0);
}

#[test]
fn test_duplicate_objects_are_rejected() {
  let duplicate = json!({ "object": { "name": "Pod", "package": "io.k8s.api.core.v1" } });
  let result = Orchestrator::new(document(json!({ "definitions": [duplicate.clone(), duplicate] })));

  assert!(matches!(
    result,
    Err(GeneratorError::DuplicateDefinition { ref name, .. }) if name == "Pod"
  ));
}

#[test]
fn test_core_fixture() {
  let output = Orchestrator::new(document(
    serde_json::from_str(include_str!("../../../fixtures/core_v1.json")).unwrap(),
  ))
  .unwrap()
  .generate();

  assert_eq!(output.stats.files_generated, 2);
  assert_eq!(output.stats.kubernetes_objects_generated, 1);

  let core = &output.files[0];
  assert_eq!(core.name, "io.k8s.api.core.v1.ts");
  assert!(core.code.starts_with(
    "import { KubernetesObject } from '@googlecontainertools/kpt-functions';\nimport * as apisMetaV1 from './io.k8s.apimachinery.pkg.apis.meta.v1';\n\n// A single application container"
  ));
  assert!(core.code.contains("export class Pod implements KubernetesObject {"));
  assert!(core.code.contains("    return new Pod({metadata: {name}});\n"));
  assert!(core.code.contains("    this.initContainers = desc.initContainers;\n"));

  let container = core.code.find("export class Container").unwrap();
  let pod = core.code.find("export class Pod ").unwrap();
  let pod_spec = core.code.find("export class PodSpec").unwrap();
  assert!(container < pod && pod < pod_spec);
}
