// Copyright (c) Microsoft. All rights reserved.

mod k8s_checks;
